//! Wire types shared with the server's JSON API.
//!
//! DESIGN
//! ======
//! Identifiers and enum-like fields stay as strings on the client so an
//! unknown value from a newer server degrades to plain text instead of a
//! decode failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role marker carried by administrators.
pub const ADMIN_ROLE: &str = "ADMIN";

/// Allowed stuff conditions, in display order.
pub const CONDITIONS: [&str; 4] = ["excellent", "good", "fair", "poor"];

/// Condition assigned when a form leaves it blank.
pub const DEFAULT_CONDITION: &str = "good";

/// The signed-in user as returned by `/api/auth/session`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Normalized email; also the owner key for stuff records.
    pub email: String,
    /// `"USER"` or `"ADMIN"`.
    pub role: String,
}

/// A stuff record owned by one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stuff {
    pub id: String,
    pub name: String,
    pub quantity: i32,
    pub condition: String,
    pub owner: String,
}

/// Body for creating or updating a stuff record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StuffDraft {
    pub name: String,
    pub quantity: i32,
    pub condition: String,
}

/// Account row on the admin page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminUserRow {
    pub id: String,
    pub email: String,
    pub role: String,
}

/// JSON error payload sent with non-2xx responses.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Capability check used wherever admin-only UI is gated.
pub fn is_admin(user: &User) -> bool {
    user.role == ADMIN_ROLE
}
