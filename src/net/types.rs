//! Identity DTOs for staff and customer sessions.
//!
//! DESIGN
//! ======
//! Gates only test for presence of an identity, so the shapes stay small and
//! mirror the session payloads returned by the API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A signed-in staff member (cashier, floor manager, admin).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Unique staff identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sign-in email.
    pub email: String,
    /// Staff role, e.g. `"admin"` or `"staff"`.
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "staff".to_owned()
}

/// A signed-in venue customer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerIdentity {
    /// Unique customer identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Phone number used to sign in.
    pub phone: String,
    /// Loyalty points balance.
    #[serde(default)]
    pub loyalty_points: i64,
}
