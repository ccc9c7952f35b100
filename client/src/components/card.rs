//! Card layout primitives.

use leptos::prelude::*;

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("card {class}")>{children()}</div> }
}

/// Centered title and description at the top of a card.
#[component]
pub fn CardHeader(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="card__header">
            <h2 class="card__title">{title}</h2>
            <p class="card__description">{description}</p>
        </div>
    }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card__content">{children()}</div> }
}

#[component]
pub fn CardFooter(children: Children) -> impl IntoView {
    view! { <div class="card__footer">{children()}</div> }
}
