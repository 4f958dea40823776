//! Input checks for the sign-in, sign-up, and change-password forms.
//!
//! These mirror the server's rules so obvious mistakes are reported without
//! a round trip; the server remains authoritative.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

pub const MIN_PASSWORD_LEN: usize = 6;

fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Returns trimmed `(email, password)` for the sign-in form.
pub fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !valid_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Returns trimmed `(email, password)` for the sign-up form.
pub fn validate_sign_up_input(email: &str, password: &str, confirm: &str) -> Result<(String, String), &'static str> {
    let (email, password) = validate_sign_in_input(email, password)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords must match.");
    }
    Ok((email, password))
}

/// Checks the change-password form before it is sent.
pub fn validate_change_password_input(old: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if old.is_empty() {
        return Err("Enter your current password.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords must match.");
    }
    Ok(())
}
