//! Session token management.
//!
//! ARCHITECTURE
//! ============
//! Browsers hold a random 32-byte hex token in an HttpOnly cookie. The store
//! only ever sees the SHA-256 of that token, so a leaked `sessions` table
//! cannot be replayed as cookies.

use std::fmt::Write;

use rand::Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::store::{Role, Store, StoreError, UserRow};

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// SHA-256 of a raw session token, hex encoded. This is the stored key.
#[must_use]
pub fn hash_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    bytes_to_hex(&digest)
}

/// Identity attached to an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl From<UserRow> for SessionUser {
    fn from(row: UserRow) -> Self {
        Self { id: row.id, email: row.email, role: row.role }
    }
}

/// Create a session for the given user, returning the raw token.
///
/// # Errors
///
/// Returns a store error if the insert fails.
pub async fn create_session(store: &dyn Store, user_id: Uuid, ttl_hours: u32) -> Result<String, StoreError> {
    let token = generate_token();
    store
        .insert_session(&hash_token(&token), user_id, ttl_hours)
        .await?;
    Ok(token)
}

/// Validate a raw session token and return the associated user.
///
/// # Errors
///
/// Returns a store error if the lookup fails.
pub async fn validate_session(store: &dyn Store, token: &str) -> Result<Option<SessionUser>, StoreError> {
    if token.is_empty() {
        return Ok(None);
    }
    let user = store.find_session_user(&hash_token(token)).await?;
    Ok(user.map(SessionUser::from))
}

/// Delete a session by raw token.
///
/// # Errors
///
/// Returns a store error if the delete fails.
pub async fn delete_session(store: &dyn Store, token: &str) -> Result<(), StoreError> {
    store.delete_session(&hash_token(token)).await
}

/// Revoke every session of `user_id` other than the one holding `keep_token`.
///
/// # Errors
///
/// Returns a store error if the delete fails.
pub async fn revoke_other_sessions(store: &dyn Store, user_id: Uuid, keep_token: &str) -> Result<u64, StoreError> {
    let revoked = store
        .delete_user_sessions_except(user_id, &hash_token(keep_token))
        .await?;
    if revoked > 0 {
        tracing::info!(%user_id, revoked, "revoked other sessions");
    }
    Ok(revoked)
}

/// Drop expired session rows.
///
/// # Errors
///
/// Returns a store error if the delete fails.
pub async fn prune_expired_sessions(store: &dyn Store) -> Result<u64, StoreError> {
    let pruned = store.delete_expired_sessions().await?;
    if pruned > 0 {
        tracing::debug!(pruned, "pruned expired sessions");
    }
    Ok(pruned)
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
