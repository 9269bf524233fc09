//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gate components wrap the pure decisions in `crate::gate` and perform the
//! navigation; display components render formatted values.

pub mod auth_gate;
pub mod authenticated_layout;
pub mod currency_display;
pub mod customer_auth_gate;
pub mod loading_indicator;
