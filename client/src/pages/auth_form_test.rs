use super::*;

#[test]
fn sign_in_trims_email_and_requires_both_fields() {
    assert_eq!(
        validate_sign_in_input("  john@foo.com ", "changeme"),
        Ok(("john@foo.com".to_owned(), "changeme".to_owned()))
    );
    assert_eq!(validate_sign_in_input("   ", "changeme"), Err("Enter both email and password."));
    assert_eq!(validate_sign_in_input("john@foo.com", ""), Err("Enter both email and password."));
}

#[test]
fn sign_in_rejects_malformed_email() {
    assert_eq!(validate_sign_in_input("john", "changeme"), Err("Enter a valid email address."));
    assert_eq!(validate_sign_in_input("@foo.com", "changeme"), Err("Enter a valid email address."));
    assert_eq!(validate_sign_in_input("a@b@c", "changeme"), Err("Enter a valid email address."));
}

#[test]
fn sign_up_requires_min_length() {
    assert_eq!(
        validate_sign_up_input("john@foo.com", "short", "short"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn sign_up_requires_matching_confirmation() {
    assert_eq!(
        validate_sign_up_input("john@foo.com", "changeme", "changeMe"),
        Err("Passwords must match.")
    );
    assert!(validate_sign_up_input("john@foo.com", "changeme", "changeme").is_ok());
}

#[test]
fn change_password_checks_in_order() {
    assert_eq!(validate_change_password_input("", "newsecret", "newsecret"), Err("Enter your current password."));
    assert_eq!(
        validate_change_password_input("changeme", "new", "new"),
        Err("Password must be at least 6 characters.")
    );
    assert_eq!(
        validate_change_password_input("changeme", "newsecret", "newsecreT"),
        Err("Passwords must match.")
    );
    assert_eq!(validate_change_password_input("changeme", "newsecret", "newsecret"), Ok(()));
}
