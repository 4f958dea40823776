//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route components apply identical redirect behavior: no session
//! goes to sign-in, a non-admin on an admin page goes to not-authorized.
//! Guards wait for the session lookup before deciding.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const SIGN_IN_PATH: &str = "/auth/signin";
pub const NOT_AUTHORIZED_PATH: &str = "/not-authorized";

/// True once auth has loaded and no user is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Where an admin-only page should send the current viewer, if anywhere.
pub fn admin_redirect_target(state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    match &state.user {
        None => Some(SIGN_IN_PATH),
        Some(_) if !state.is_admin() => Some(NOT_AUTHORIZED_PATH),
        Some(_) => None,
    }
}

/// Redirect to sign-in whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(SIGN_IN_PATH, NavigateOptions::default());
        }
    });
}

/// Redirect away from admin pages for anonymous and non-admin viewers.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = admin_redirect_target(&auth.get()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
