//! Customer auth-session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The customer provider restores sessions asynchronously, so the state
//! starts out loading and `CustomerAuthGate` holds its decision until the
//! provider resolves.

#[cfg(test)]
#[path = "customer_auth_test.rs"]
mod customer_auth_test;

use crate::net::types::CustomerIdentity;

/// Lifecycle phase derived from a [`CustomerAuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomerAuthPhase {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Authentication state for customer-facing routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerAuthState {
    pub user: Option<CustomerIdentity>,
    pub is_loading: bool,
}

impl Default for CustomerAuthState {
    /// Every mount begins in the loading phase.
    fn default() -> Self {
        Self { user: None, is_loading: true }
    }
}

impl CustomerAuthState {
    /// State after the provider finished restoring the session.
    pub fn resolved(user: Option<CustomerIdentity>) -> Self {
        Self { user, is_loading: false }
    }

    pub fn phase(&self) -> CustomerAuthPhase {
        if self.is_loading {
            CustomerAuthPhase::Loading
        } else if self.user.is_some() {
            CustomerAuthPhase::Authenticated
        } else {
            CustomerAuthPhase::Unauthenticated
        }
    }
}
