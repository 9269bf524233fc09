//! Grouped amount display without the currency symbol.

use leptos::prelude::*;

use crate::util::currency::format_amount;

/// Renders `amount` with Indian digit grouping, e.g. `12,34,567`.
#[component]
pub fn CurrencyDisplay(#[prop(into)] amount: Signal<f64>) -> impl IntoView {
    view! { <span class="currency-display">{move || format_amount(amount.get())}</span> }
}
