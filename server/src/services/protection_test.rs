use super::*;
use uuid::Uuid;

fn user(role: Role) -> SessionUser {
    SessionUser { id: Uuid::nil(), email: "john@foo.com".into(), role }
}

#[test]
fn logged_in_protected_rejects_missing_session() {
    assert_eq!(logged_in_protected(None), Err(Protection::SignIn));
}

#[test]
fn logged_in_protected_passes_any_role() {
    let u = user(Role::User);
    let a = user(Role::Admin);
    assert_eq!(logged_in_protected(Some(&u)), Ok(&u));
    assert_eq!(logged_in_protected(Some(&a)), Ok(&a));
}

#[test]
fn admin_protected_distinguishes_anonymous_from_non_admin() {
    let u = user(Role::User);
    assert_eq!(admin_protected(None), Err(Protection::SignIn));
    assert_eq!(admin_protected(Some(&u)), Err(Protection::NotAuthorized));
}

#[test]
fn admin_protected_passes_admin() {
    let a = user(Role::Admin);
    assert_eq!(admin_protected(Some(&a)), Ok(&a));
}

#[test]
fn is_admin_only_for_admin_role() {
    assert!(is_admin(&user(Role::Admin)));
    assert!(!is_admin(&user(Role::User)));
}

#[test]
fn protection_maps_to_redirects_and_statuses() {
    assert_eq!(Protection::SignIn.redirect_path(), "/auth/signin");
    assert_eq!(Protection::NotAuthorized.redirect_path(), "/not-authorized");
    assert_eq!(Protection::SignIn.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(Protection::NotAuthorized.status(), StatusCode::FORBIDDEN);
}
