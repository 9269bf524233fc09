//! Staff route gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every staff route. Re-evaluates on each auth or location change and
//! either renders its children or replaces the history entry with `/login`,
//! carrying the full requested location for the post-login return.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::gate::decision::{AuthDecision, decide_auth};
use crate::gate::location::RequestedLocation;
use crate::gate::provider::require_provider;
use crate::state::auth::AuthState;

/// Renders `children` only for a signed-in staff user.
///
/// Panics at mount if no `RwSignal<AuthState>` was provided.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = require_provider::<RwSignal<AuthState>>("AuthState").unwrap_or_else(|err| panic!("{err}"));
    let location = use_location();
    let navigate = use_navigate();

    let (pathname, search, hash) = (location.pathname, location.search, location.hash);
    let decision = Memo::new(move |_| {
        let requested = RequestedLocation::new(pathname.get(), search.get(), hash.get());
        decide_auth(&auth.get(), &requested)
    });

    Effect::new(move || {
        if let AuthDecision::Redirect(redirect) = decision.get() {
            log::debug!("unauthenticated at {}; redirecting to {}", redirect.carry.href(), redirect.path);
            navigate(redirect.path, redirect.navigate_options());
        }
    });

    move || matches!(decision.get(), AuthDecision::Render).then(|| children())
}
