use super::*;

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn signed_in_state_is_authenticated() {
    let state = AuthState::signed_in(UserIdentity {
        id: "u1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        role: "admin".to_owned(),
    });
    assert!(state.is_authenticated());
}
