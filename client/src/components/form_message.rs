//! Inline success/error banners shown under the submit button.

#[cfg(test)]
#[path = "form_message_test.rs"]
mod form_message_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

pub(crate) fn message_class(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Success => "form-message form-message--success",
        MessageKind::Error => "form-message form-message--error",
    }
}

pub(crate) fn message_role(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Success => "status",
        MessageKind::Error => "alert",
    }
}

/// Banner that renders nothing while `message` is empty.
#[component]
pub fn FormMessage(kind: MessageKind, #[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || message.with(|m| !m.is_empty())>
            <div class=message_class(kind) role=message_role(kind)>
                {move || message.get()}
            </div>
        </Show>
    }
}

#[component]
pub fn FormSuccess(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! { <FormMessage kind=MessageKind::Success message=message/> }
}

#[component]
pub fn FormError(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! { <FormMessage kind=MessageKind::Error message=message/> }
}
