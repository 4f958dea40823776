//! Page-protection policy.
//!
//! Every protected handler resolves the session first and runs it through one
//! of these checks before it is allowed to touch the store.

use axum::http::StatusCode;

use super::session::SessionUser;
use crate::store::Role;

pub const SIGN_IN_PATH: &str = "/auth/signin";
pub const NOT_AUTHORIZED_PATH: &str = "/not-authorized";

/// Why a request was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    /// No session; the visitor must sign in.
    SignIn,
    /// Signed in, but lacking the required role.
    NotAuthorized,
}

impl Protection {
    /// Page a browser should be sent to.
    #[must_use]
    pub fn redirect_path(self) -> &'static str {
        match self {
            Self::SignIn => SIGN_IN_PATH,
            Self::NotAuthorized => NOT_AUTHORIZED_PATH,
        }
    }

    /// Status an API caller receives.
    #[must_use]
    pub fn status(self) -> StatusCode {
        match self {
            Self::SignIn => StatusCode::UNAUTHORIZED,
            Self::NotAuthorized => StatusCode::FORBIDDEN,
        }
    }
}

/// Capability check for admin-only surfaces.
#[must_use]
pub fn is_admin(user: &SessionUser) -> bool {
    user.role == Role::Admin
}

/// Require any signed-in user.
///
/// # Errors
///
/// Returns [`Protection::SignIn`] when there is no session.
pub fn logged_in_protected(session: Option<&SessionUser>) -> Result<&SessionUser, Protection> {
    session.ok_or(Protection::SignIn)
}

/// Require a signed-in admin.
///
/// # Errors
///
/// Returns [`Protection::SignIn`] without a session and
/// [`Protection::NotAuthorized`] for non-admin sessions.
pub fn admin_protected(session: Option<&SessionUser>) -> Result<&SessionUser, Protection> {
    let user = logged_in_protected(session)?;
    if !is_admin(user) {
        return Err(Protection::NotAuthorized);
    }
    Ok(user)
}

#[cfg(test)]
#[path = "protection_test.rs"]
mod tests;
