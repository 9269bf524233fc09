//! Placeholder landings for gated sections until their feature pages mount.

use leptos::prelude::*;

use crate::components::currency_display::CurrencyDisplay;
use crate::state::customer_auth::CustomerAuthState;

#[component]
pub fn SectionLanding(title: &'static str) -> impl IntoView {
    view! {
        <section class="section-landing">
            <h1>{title}</h1>
        </section>
    }
}

/// Customer home showing the loyalty balance of the signed-in customer.
#[component]
pub fn CustomerHomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<CustomerAuthState>>();
    let name = move || auth.get().user.map(|user| user.name).unwrap_or_default();
    #[allow(clippy::cast_precision_loss)]
    let points = Signal::derive(move || auth.get().user.map_or(0.0, |user| user.loyalty_points as f64));

    view! {
        <section class="customer-home">
            <h1>"Welcome, " {name}</h1>
            <p>"Loyalty points: " <CurrencyDisplay amount=points/></p>
        </section>
    }
}
