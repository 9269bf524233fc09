use super::*;
use crate::state::auth::AuthState;

#[test]
fn resolve_provider_passes_through_present_state() {
    assert_eq!(resolve_provider(Some(AuthState::default()), "AuthState"), Ok(AuthState::default()));
}

#[test]
fn resolve_provider_reports_missing_state() {
    let err = resolve_provider::<AuthState>(None, "AuthState").unwrap_err();
    assert_eq!(err, GateError::MissingProvider { provider: "AuthState" });
    assert_eq!(err.to_string(), "AuthState is not provided; wrap the route tree in its provider");
}

#[test]
fn require_provider_fails_outside_any_owner() {
    assert!(require_provider::<AuthState>("AuthState").is_err());
}

#[test]
fn require_provider_fails_inside_owner_without_context() {
    use leptos::prelude::Owner;

    let result = Owner::new().with(|| require_provider::<AuthState>("AuthState"));
    assert_eq!(result, Err(GateError::MissingProvider { provider: "AuthState" }));
}

#[test]
fn require_provider_finds_provided_context() {
    use leptos::prelude::{Owner, provide_context};

    let result = Owner::new().with(|| {
        provide_context(AuthState::default());
        require_provider::<AuthState>("AuthState")
    });
    assert_eq!(result, Ok(AuthState::default()));
}
