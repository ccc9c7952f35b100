//! Email/password login card.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns a `RwSignal<LoginFormState>`; every input, submission, and settled
//! result goes through that signal so the view re-renders on change. The
//! credential check itself happens behind `net::api::login`.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardFooter, CardHeader};
use crate::components::form_field::FormField;
use crate::components::form_message::{FormError, FormSuccess};
use crate::components::oauth_buttons::OAuthButtons;
use crate::state::login::LoginFormState;
use crate::util::schema::LOGIN_FIELDS;

pub const REGISTER_HREF: &str = "/register";

/// Login card with fresh, empty form state.
#[component]
pub fn LoginForm() -> impl IntoView {
    let form = RwSignal::new(LoginFormState::default());
    view! { <LoginCard form=form/> }
}

/// Login card bound to an existing form state signal.
#[component]
pub fn LoginCard(form: RwSignal<LoginFormState>) -> impl IntoView {
    let pending = Memo::new(move |_| form.with(LoginFormState::is_pending));
    let success = Signal::derive(move || form.with(|f| f.success.clone()));
    let error = Signal::derive(move || form.with(|f| f.error.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Stale responses are still applied; try_update tolerates an unmounted form.
        #[cfg(feature = "hydrate")]
        {
            let Some(credentials) = form.try_update(LoginFormState::begin_submit) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&credentials).await {
                    Ok(result) => {
                        form.try_update(|f| f.settle(result));
                    }
                    Err(e) => {
                        log::error!("login action failed: {e}");
                        form.try_update(LoginFormState::abandon);
                    }
                }
            });
        }
    };

    let fields = LOGIN_FIELDS
        .into_iter()
        .map(|spec| {
            let value = Signal::derive(move || form.with(|f| f.field(spec.name).to_owned()));
            view! {
                <FormField
                    spec=spec
                    value=value
                    on_input=move |v: String| form.update(|f| f.set_field(spec.name, v))
                    disabled=pending
                />
            }
        })
        .collect_view();

    view! {
        <div class="login">
            <Card class="login__card">
                <CardHeader title="Welcome back" description="Login to VChess"/>
                <CardContent>
                    <form class="login-form" on:submit=on_submit>
                        {fields}
                        <p class="form-description login-form__register">
                            <span>"Don't have account?"</span>
                            <span>
                                <a href=REGISTER_HREF>"Register"</a>
                            </span>
                        </p>
                        <button
                            type="submit"
                            class="button button--lg button--full"
                            disabled=move || pending.get()
                        >
                            "Login"
                        </button>
                        <FormSuccess message=success/>
                        <FormError message=error/>
                    </form>
                </CardContent>
                <CardFooter>
                    <OAuthButtons/>
                </CardFooter>
            </Card>
        </div>
    }
}
