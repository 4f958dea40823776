use super::*;

fn user(role: &str) -> User {
    User {
        id: "00000000-0000-0000-0000-000000000001".to_owned(),
        email: "john@foo.com".to_owned(),
        role: role.to_owned(),
    }
}

#[test]
fn is_admin_only_for_exact_admin_marker() {
    assert!(is_admin(&user("ADMIN")));
    assert!(!is_admin(&user("USER")));
    assert!(!is_admin(&user("admin")));
    assert!(!is_admin(&user("")));
}

#[test]
fn user_deserializes_session_payload() {
    let json = r#"{"id":"abc","email":"john@foo.com","role":"USER"}"#;
    let parsed: User = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.email, "john@foo.com");
    assert_eq!(parsed.role, "USER");
}

#[test]
fn stuff_deserializes_server_record() {
    let json = r#"{"id":"s1","name":"Basket","quantity":3,"condition":"excellent","owner":"john@foo.com"}"#;
    let parsed: Stuff = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.quantity, 3);
    assert_eq!(parsed.condition, "excellent");
}

#[test]
fn draft_serializes_expected_fields() {
    let draft = StuffDraft { name: "Basket".to_owned(), quantity: 3, condition: "fair".to_owned() };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value, serde_json::json!({ "name": "Basket", "quantity": 3, "condition": "fair" }));
}

#[test]
fn default_condition_is_listed() {
    assert!(CONDITIONS.contains(&DEFAULT_CONDITION));
}
