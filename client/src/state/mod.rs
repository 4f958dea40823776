//! Client-side state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` tracks the session user for guards and the navigation bar;
//! `contacts` holds the static sample contacts shown on the list page.

pub mod auth;
pub mod contacts;
