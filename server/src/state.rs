//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the persistence seam and the session/cookie settings every auth
//! route needs. Nothing in here is mutable; per-request data lives in the
//! extractors.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::Store;

/// Session and cookie behavior shared by auth routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthSettings {
    /// Lifetime of a freshly issued session.
    pub session_ttl_hours: u32,
    /// Mark session cookies `Secure`.
    pub cookie_secure: bool,
}

impl AuthSettings {
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self { session_ttl_hours: config.session_ttl_hours, cookie_secure: config.cookie_secure }
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub auth: AuthSettings,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn Store>, auth: AuthSettings) -> Self {
        Self { store, auth }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
