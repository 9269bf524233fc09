//! Provider lookup for gate components.
//!
//! A gate mounted without its state provider is a wiring defect, distinct
//! from a logged-out visitor, and must not be read as "unauthenticated".

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use leptos::prelude::use_context;

use crate::error::GateError;

/// Turns an optional provider lookup into a hard error.
pub fn resolve_provider<T>(source: Option<T>, provider: &'static str) -> Result<T, GateError> {
    source.ok_or(GateError::MissingProvider { provider })
}

/// Reads `T` from the reactive context, failing if no ancestor provided it.
pub fn require_provider<T: Clone + 'static>(provider: &'static str) -> Result<T, GateError> {
    resolve_provider(use_context::<T>(), provider)
}
