//! Persistence seam for users, sessions, and stuff records.
//!
//! DESIGN
//! ======
//! Services talk to the database only through the [`Store`] trait. The
//! production implementation is [`postgres::PgStore`]; tests swap in an
//! in-memory store that also counts reads, so ordering guarantees such as
//! "no stuff query before authorization" can be asserted directly.
//!
//! Every stuff query that serves a user is keyed by owner email. Rows owned
//! by someone else are indistinguishable from rows that do not exist.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

/// Role marker carried on every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "USER" => Some(Self::User),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Physical condition of a stuff record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Row from the `users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// A persisted stuff record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stuff {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub condition: Condition,
    /// Email of the owning user.
    pub owner: String,
}

/// Validated, owner-less field set used for inserts and updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StuffFields {
    pub name: String,
    pub quantity: i32,
    pub condition: Condition,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    Conflict(&'static str),
    #[error("unreadable row: {0}")]
    Decode(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// =============================================================================
// STORE TRAIT
// =============================================================================

#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Insert a new user. Fails with [`StoreError::Conflict`] if the email exists.
    async fn insert_user(&self, email: &str, password_hash: &str, role: Role) -> Result<UserRow, StoreError>;

    /// Insert or update a user, forcing the given password hash and role.
    async fn upsert_user(&self, email: &str, password_hash: &str, role: Role) -> Result<UserRow, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, StoreError>;

    async fn update_password_hash(&self, user_id: Uuid, password_hash: &str) -> Result<(), StoreError>;

    /// All users ordered by email.
    async fn list_users(&self) -> Result<Vec<UserRow>, StoreError>;

    /// Persist a session keyed by the hash of its token.
    async fn insert_session(&self, token_hash: &str, user_id: Uuid, ttl_hours: u32) -> Result<(), StoreError>;

    /// Resolve an unexpired session to its user.
    async fn find_session_user(&self, token_hash: &str) -> Result<Option<UserRow>, StoreError>;

    async fn delete_session(&self, token_hash: &str) -> Result<(), StoreError>;

    /// Delete every session of `user_id` except the one keyed by `keep_token_hash`.
    async fn delete_user_sessions_except(&self, user_id: Uuid, keep_token_hash: &str) -> Result<u64, StoreError>;

    /// Delete sessions past their expiry. Returns the number removed.
    async fn delete_expired_sessions(&self) -> Result<u64, StoreError>;

    /// All stuff whose owner equals `owner`.
    async fn list_stuff_by_owner(&self, owner: &str) -> Result<Vec<Stuff>, StoreError>;

    /// All stuff regardless of owner.
    async fn list_all_stuff(&self) -> Result<Vec<Stuff>, StoreError>;

    async fn find_stuff(&self, id: Uuid, owner: &str) -> Result<Option<Stuff>, StoreError>;

    async fn insert_stuff(&self, owner: &str, fields: &StuffFields) -> Result<Stuff, StoreError>;

    /// Update a record in place. Returns `None` if no row matched `id` + `owner`.
    async fn update_stuff(&self, id: Uuid, owner: &str, fields: &StuffFields) -> Result<Option<Stuff>, StoreError>;

    /// Delete a record. Returns `false` if no row matched `id` + `owner`.
    async fn delete_stuff(&self, id: Uuid, owner: &str) -> Result<bool, StoreError>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
