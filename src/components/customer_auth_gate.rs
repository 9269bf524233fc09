//! Customer route gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Customer sessions restore asynchronously. Until the provider resolves the
//! gate shows a waiting indicator and makes no decision. Unauthenticated
//! visitors are sent to `/customer/login` carrying only the requested path.
//!
//! TRADE-OFFS
//! ==========
//! By default the gate waits as long as the provider takes. A bounded wait
//! can be configured through `GateConfig::customer_wait_timeout`, after which
//! a still-loading provider is treated as signed out.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading_indicator::LoadingIndicator;
use crate::config::GateConfig;
#[cfg(feature = "hydrate")]
use crate::gate::decision::wait_expiry_applies;
use crate::gate::decision::{CustomerAuthDecision, decide_customer_auth_with_timeout, timed_out_after_update};
use crate::gate::location::RequestedLocation;
use crate::gate::provider::require_provider;
use crate::state::customer_auth::CustomerAuthState;

/// Renders `children` only for a signed-in customer.
///
/// Panics at mount if no `RwSignal<CustomerAuthState>` was provided.
#[component]
pub fn CustomerAuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = require_provider::<RwSignal<CustomerAuthState>>("CustomerAuthState")
        .unwrap_or_else(|err| panic!("{err}"));
    let config = use_context::<GateConfig>().unwrap_or_default();
    let location = use_location();
    let navigate = use_navigate();
    let timed_out = RwSignal::new(false);
    let episode = RwSignal::new(0_u64);
    let loading = Memo::new(move |_| auth.get().is_loading);

    // Each loading episode gets its own timer; resolving clears the flag.
    Effect::new(move || {
        let is_loading = loading.get();
        let current = timed_out.get_untracked();
        let next = timed_out_after_update(current, &auth.get_untracked());
        if next != current {
            timed_out.set(next);
        }
        if !is_loading {
            return;
        }
        let started = episode.get_untracked() + 1;
        episode.set(started);

        #[cfg(feature = "hydrate")]
        if let Some(limit) = config.customer_wait_timeout {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(limit).await;
                let (Some(state), Some(current)) = (auth.try_get_untracked(), episode.try_get_untracked()) else {
                    return;
                };
                if wait_expiry_applies(&state, started, current) {
                    log::warn!("customer auth still loading after {limit:?}; treating as signed out");
                    let _ = timed_out.try_set(true);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (started, config);
    });

    let (pathname, search, hash) = (location.pathname, location.search, location.hash);
    let decision = Memo::new(move |_| {
        let requested = RequestedLocation::new(pathname.get(), search.get(), hash.get());
        decide_customer_auth_with_timeout(&auth.get(), &requested, timed_out.get())
    });

    Effect::new(move || {
        if let CustomerAuthDecision::Redirect(redirect) = decision.get() {
            log::debug!("customer unauthenticated at {}; redirecting to {}", redirect.carry, redirect.path);
            navigate(redirect.path, redirect.navigate_options());
        }
    });

    move || match decision.get() {
        CustomerAuthDecision::Waiting => view! { <LoadingIndicator/> }.into_any(),
        CustomerAuthDecision::Render => children(),
        CustomerAuthDecision::Redirect(_) => ().into_any(),
    }
}
