//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls and `types` defines the shared wire schema.

pub mod api;
pub mod types;
