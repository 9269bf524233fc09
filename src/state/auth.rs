//! Staff auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Populated by the staff auth provider and read by `AuthGate`. The provider
//! resolves eagerly, so no loading flag is modeled.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserIdentity;

/// Authentication state for staff routes.
///
/// Absence of `user` is the only authorization signal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserIdentity>,
}

impl AuthState {
    pub fn signed_in(user: UserIdentity) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
