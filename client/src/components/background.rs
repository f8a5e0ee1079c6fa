//! Decorative background layers shared by every route.

use leptos::prelude::*;

#[component]
pub fn BackgroundDecor() -> impl IntoView {
    view! {
        <div class="bg-layer bg-layer--top-right" aria-hidden="true"></div>
        <div class="bg-lines" aria-hidden="true"></div>
        <div class="bg-layer bg-layer--circle" aria-hidden="true"></div>
        <div class="bg-layer bg-layer--bottom-left" aria-hidden="true"></div>
    }
}
