//! Provider-owned session state read by the route gates.
//!
//! DESIGN
//! ======
//! Staff and customer sessions are separate models because the customer
//! provider exposes a loading flag the staff provider does not.

pub mod auth;
pub mod customer_auth;
