//! Formatting helpers shared across console pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Billing, station timers and reports all format through these modules so
//! rounding and grouping rules stay consistent.

pub mod currency;
pub mod numeric;
pub mod time;
