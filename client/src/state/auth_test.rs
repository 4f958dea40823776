use super::*;

fn user(role: &str) -> User {
    User {
        id: "u1".to_owned(),
        email: "john@foo.com".to_owned(),
        role: role.to_owned(),
    }
}

#[test]
fn pending_is_loading_without_user() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn resolved_clears_loading() {
    assert!(!AuthState::resolved(None).loading);
    assert!(AuthState::resolved(Some(user("USER"))).is_signed_in());
}

#[test]
fn is_admin_follows_role_marker() {
    assert!(AuthState::resolved(Some(user("ADMIN"))).is_admin());
    assert!(!AuthState::resolved(Some(user("USER"))).is_admin());
    assert!(!AuthState::resolved(None).is_admin());
}
