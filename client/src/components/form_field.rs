//! Labelled, controlled input bound to one declared form field.

#[cfg(all(test, feature = "ssr"))]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;

use crate::util::schema::FieldSpec;

/// Label plus input for `spec`.
///
/// The input is controlled: it shows `value` and reports every keystroke
/// through `on_input`. `disabled` locks it while a submission is pending.
#[component]
pub fn FormField(
    spec: FieldSpec,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let id = format!("field-{}", spec.name);

    view! {
        <div class="form-item">
            <label class="form-item__label" for=id.clone()>
                {spec.label()}
            </label>
            <input
                class="form-item__input"
                id=id
                name=spec.name
                type=spec.input_type()
                autocomplete=spec.autocomplete()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}
