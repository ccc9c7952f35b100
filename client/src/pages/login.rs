//! Login page hosting the email/password form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::login_form::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Login | VChess"/>
        <div class="login-page">
            <LoginForm/>
        </div>
    }
}
