//! Route gating: pure render-or-redirect decisions for staff and customer
//! routes.
//!
//! DESIGN
//! ======
//! Decisions are plain functions of the provider state and the requested
//! location, so they can be re-evaluated on every state change without
//! accumulating side effects. Components in `crate::components` wrap them
//! and perform the actual navigation.

pub mod decision;
pub mod location;
pub mod provider;

/// Staff login route.
pub const LOGIN_PATH: &str = "/login";
/// Customer login route.
pub const CUSTOMER_LOGIN_PATH: &str = "/customer/login";
