//! Neutral waiting indicator shown while a gate holds its decision.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="gate-loading" role="status" aria-live="polite">
            <span class="gate-loading__spinner" aria-hidden="true"></span>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
