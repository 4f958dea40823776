//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic over the [`crate::store::Store`] seam
//! so route handlers can stay focused on protocol translation and auth
//! plumbing.

pub mod auth;
pub mod protection;
pub mod session;
pub mod stuff;
