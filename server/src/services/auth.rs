//! Credentials auth service over the user and session store.
//!
//! Passwords are hashed with Argon2id (PHC string format). Sign-in failures
//! never reveal whether the email exists.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use uuid::Uuid;

use crate::config::AdminBootstrap;
use crate::store::{Role, Store, StoreError, UserRow};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("password is too short")]
    WeakPassword,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("incorrect email or password")]
    InvalidCredentials,
    #[error("email already registered")]
    EmailTaken,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Trim and lowercase an email; reject anything that is not `local@domain`.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

/// # Errors
///
/// Returns [`AuthError::WeakPassword`] if shorter than [`MIN_PASSWORD_LEN`].
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword);
    }
    Ok(())
}

/// Hash a password into an Argon2id PHC string.
///
/// # Errors
///
/// Returns [`AuthError::Hash`] if the hasher rejects its parameters.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

/// Check a password against a stored PHC string. Malformed hashes never verify.
#[must_use]
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Register a new `USER` account.
///
/// # Errors
///
/// Returns a validation error, [`AuthError::EmailTaken`], or a store error.
pub async fn sign_up(store: &dyn Store, email: &str, password: &str) -> Result<UserRow, AuthError> {
    let email = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    validate_password(password)?;
    let hash = hash_password(password)?;

    match store.insert_user(&email, &hash, Role::User).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "user signed up");
            Ok(user)
        }
        Err(StoreError::Conflict(_)) => Err(AuthError::EmailTaken),
        Err(e) => Err(e.into()),
    }
}

/// Verify credentials and return the matching user.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] for an unknown email or a wrong
/// password, or a store error.
pub async fn sign_in(store: &dyn Store, email: &str, password: &str) -> Result<UserRow, AuthError> {
    let email = normalize_email(email).ok_or(AuthError::InvalidCredentials)?;
    let Some(user) = store.find_user_by_email(&email).await? else {
        return Err(AuthError::InvalidCredentials);
    };
    if !verify_password(password, &user.password_hash) {
        tracing::debug!(user_id = %user.id, "password mismatch");
        return Err(AuthError::InvalidCredentials);
    }
    Ok(user)
}

/// Replace a user's password after verifying the current one.
///
/// # Errors
///
/// Returns [`AuthError::PasswordMismatch`] if `password != confirm`,
/// [`AuthError::InvalidCredentials`] if `old_password` is wrong, a
/// validation error, or a store error.
pub async fn change_password(
    store: &dyn Store,
    user_id: Uuid,
    email: &str,
    old_password: &str,
    password: &str,
    confirm: &str,
) -> Result<(), AuthError> {
    if password != confirm {
        return Err(AuthError::PasswordMismatch);
    }
    validate_password(password)?;

    let user = sign_in(store, email, old_password).await?;
    if user.id != user_id {
        return Err(AuthError::InvalidCredentials);
    }

    let hash = hash_password(password)?;
    store.update_password_hash(user_id, &hash).await?;
    tracing::info!(%user_id, "password changed");
    Ok(())
}

/// Create or refresh the bootstrap admin account.
///
/// # Errors
///
/// Returns a validation, hashing, or store error.
pub async fn ensure_admin(store: &dyn Store, admin: &AdminBootstrap) -> Result<UserRow, AuthError> {
    let email = normalize_email(&admin.email).ok_or(AuthError::InvalidEmail)?;
    validate_password(&admin.password)?;
    let hash = hash_password(&admin.password)?;
    let user = store.upsert_user(&email, &hash, Role::Admin).await?;
    tracing::info!(user_id = %user.id, "admin account ready");
    Ok(user)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
