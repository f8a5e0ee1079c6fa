//! Inline validation message rendered under a form field.

use leptos::prelude::*;

use crate::util::validation::FieldError;

/// Renders the field's current error, or nothing when it passes.
#[component]
pub fn FieldErrorText(#[prop(into)] error: Signal<Option<FieldError>>, id: &'static str) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="field-error" id=id role="alert">
                {move || error.get().map(|e| e.to_string()).unwrap_or_default()}
            </p>
        </Show>
    }
}
