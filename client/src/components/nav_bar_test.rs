use super::*;

use crate::net::types::User;

fn user(role: &str) -> AuthState {
    AuthState::resolved(Some(User {
        id: "u1".to_owned(),
        email: "john@foo.com".to_owned(),
        role: role.to_owned(),
    }))
}

fn link_ids(model: &NavModel) -> Vec<&'static str> {
    model.links.iter().map(|link| link.id).collect()
}

fn menu_hrefs(model: &NavModel) -> Vec<&'static str> {
    model.menu.iter().map(|item| item.href).collect()
}

// =============================================================
// Session lookup pending
// =============================================================

#[test]
fn pending_session_renders_no_links_or_menu() {
    let model = nav_model(&AuthState::pending(), "/list");
    assert!(model.links.is_empty());
    assert!(model.menu.is_empty());
    assert!(model.menu_title.is_empty());
}

#[test]
fn pending_session_never_offers_sign_in() {
    let model = nav_model(&AuthState::pending(), "/auth/signin");
    assert!(!menu_hrefs(&model).contains(&"/auth/signin"));
    assert!(!menu_hrefs(&model).contains(&"/auth/signup"));
}

// =============================================================
// Anonymous
// =============================================================

#[test]
fn anonymous_sees_only_login_menu() {
    let model = nav_model(&AuthState::resolved(None), "/list");
    assert!(model.links.is_empty());
    assert_eq!(model.menu_title, "Login");
    assert_eq!(menu_hrefs(&model), vec!["/auth/signin", "/auth/signup"]);
}

// =============================================================
// Signed in
// =============================================================

#[test]
fn user_sees_add_and_list_without_admin() {
    let model = nav_model(&user("USER"), "/list");
    assert_eq!(link_ids(&model), vec!["add-stuff-nav", "list-stuff-nav"]);
}

#[test]
fn admin_sees_admin_link() {
    let model = nav_model(&user("ADMIN"), "/list");
    assert_eq!(link_ids(&model), vec!["add-stuff-nav", "list-stuff-nav", "admin-stuff-nav"]);
}

#[test]
fn lowercase_admin_role_is_not_admin() {
    let model = nav_model(&user("admin"), "/list");
    assert!(!link_ids(&model).contains(&"admin-stuff-nav"));
}

#[test]
fn signed_in_menu_is_titled_with_email() {
    let model = nav_model(&user("USER"), "/add");
    assert_eq!(model.menu_title, "john@foo.com");
    assert_eq!(menu_hrefs(&model), vec!["/auth/signout", "/auth/change-password"]);
}

#[test]
fn signed_in_menu_never_offers_sign_up() {
    let model = nav_model(&user("ADMIN"), "/admin");
    assert!(!menu_hrefs(&model).contains(&"/auth/signup"));
}

// =============================================================
// Active link
// =============================================================

#[test]
fn active_link_matches_current_path_exactly() {
    let model = nav_model(&user("ADMIN"), "/admin");
    let active: Vec<_> = model.links.iter().filter(|link| link.active).map(|link| link.href).collect();
    assert_eq!(active, vec!["/admin"]);
}

#[test]
fn no_link_active_on_unrelated_path() {
    let model = nav_model(&user("USER"), "/edit/abc");
    assert!(model.links.iter().all(|link| !link.active));
}

#[test]
fn active_link_ignores_prefix_match() {
    let model = nav_model(&user("USER"), "/list/extra");
    assert!(model.links.iter().all(|link| !link.active));
}
