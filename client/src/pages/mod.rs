//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetches, submits) and
//! delegates rendering details to `components`.

pub mod add_stuff;
pub mod admin;
pub(crate) mod auth_form;
pub mod change_password;
pub mod edit_stuff;
pub mod list;
pub mod not_authorized;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub(crate) mod stuff_form;
