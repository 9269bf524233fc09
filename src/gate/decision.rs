//! Render-or-redirect decisions for the staff and customer gates.
//!
//! The two redirect payloads differ on purpose: the staff login flow reads a
//! full location object, the customer login flow reads a bare path.

#[cfg(test)]
#[path = "decision_test.rs"]
mod decision_test;

use leptos_router::NavigateOptions;
use leptos_router::location::State;

use super::location::{CarriedState, RequestedLocation};
use super::{CUSTOMER_LOGIN_PATH, LOGIN_PATH};
use crate::state::auth::AuthState;
use crate::state::customer_auth::{CustomerAuthPhase, CustomerAuthState};

// =============================================================================
// STAFF GATE
// =============================================================================

/// Redirect to the staff login page carrying the full requested location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthRedirect {
    pub path: &'static str,
    pub carry: RequestedLocation,
    pub replace: bool,
}

impl AuthRedirect {
    /// JSON navigation state: `{"from": {pathname, search, hash}}`.
    pub fn carried_state(&self) -> String {
        serde_json::to_string(&CarriedState { from: &self.carry }).unwrap_or_default()
    }

    pub fn navigate_options(&self) -> NavigateOptions {
        redirect_options(self.replace, &self.carried_state())
    }
}

/// Outcome of [`decide_auth`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthDecision {
    Render,
    Redirect(AuthRedirect),
}

/// Staff gate: render for a signed-in user, otherwise replace the current
/// history entry with `/login`.
pub fn decide_auth(state: &AuthState, location: &RequestedLocation) -> AuthDecision {
    if state.user.is_some() {
        return AuthDecision::Render;
    }
    AuthDecision::Redirect(AuthRedirect { path: LOGIN_PATH, carry: location.clone(), replace: true })
}

// =============================================================================
// CUSTOMER GATE
// =============================================================================

/// Redirect to the customer login page carrying only the requested path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerAuthRedirect {
    pub path: &'static str,
    pub carry: String,
    pub replace: bool,
}

impl CustomerAuthRedirect {
    /// JSON navigation state: `{"from": "/path"}`.
    pub fn carried_state(&self) -> String {
        serde_json::to_string(&CarriedState { from: &self.carry }).unwrap_or_default()
    }

    pub fn navigate_options(&self) -> NavigateOptions {
        redirect_options(self.replace, &self.carried_state())
    }
}

/// Outcome of [`decide_customer_auth`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CustomerAuthDecision {
    /// Provider still loading; show a waiting indicator and take no action.
    Waiting,
    Render,
    Redirect(CustomerAuthRedirect),
}

/// Customer gate: wait while loading, then render or redirect to
/// `/customer/login`.
pub fn decide_customer_auth(state: &CustomerAuthState, location: &RequestedLocation) -> CustomerAuthDecision {
    match state.phase() {
        CustomerAuthPhase::Loading => CustomerAuthDecision::Waiting,
        CustomerAuthPhase::Authenticated => CustomerAuthDecision::Render,
        CustomerAuthPhase::Unauthenticated => customer_redirect(location),
    }
}

/// [`decide_customer_auth`] with a bounded wait: once `timed_out` is set a
/// still-loading provider is treated as unauthenticated.
pub fn decide_customer_auth_with_timeout(
    state: &CustomerAuthState,
    location: &RequestedLocation,
    timed_out: bool,
) -> CustomerAuthDecision {
    match decide_customer_auth(state, location) {
        CustomerAuthDecision::Waiting if timed_out => customer_redirect(location),
        decision => decision,
    }
}

/// Whether a wait timer started for loading episode `started` should mark
/// the gate as timed out when it fires.
///
/// Only the current episode counts, and only while the provider is still
/// loading.
pub fn wait_expiry_applies(state: &CustomerAuthState, started: u64, current: u64) -> bool {
    started == current && state.is_loading
}

/// Timed-out flag carried forward after a provider update; cleared once the
/// provider resolves.
pub fn timed_out_after_update(timed_out: bool, state: &CustomerAuthState) -> bool {
    timed_out && state.is_loading
}

fn customer_redirect(location: &RequestedLocation) -> CustomerAuthDecision {
    CustomerAuthDecision::Redirect(CustomerAuthRedirect {
        path: CUSTOMER_LOGIN_PATH,
        carry: location.pathname.clone(),
        replace: true,
    })
}

fn redirect_options(replace: bool, carried: &str) -> NavigateOptions {
    NavigateOptions { replace, state: carried_js_state(carried), ..NavigateOptions::default() }
}

#[cfg(feature = "hydrate")]
fn carried_js_state(carried: &str) -> State {
    State::new(Some(wasm_bindgen::JsValue::from_str(carried)))
}

#[cfg(not(feature = "hydrate"))]
fn carried_js_state(_carried: &str) -> State {
    State::default()
}
