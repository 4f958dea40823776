//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it together with Leptos SSR
//! page rendering under a single Axum router. `/` is a fixed redirect to
//! `/list`; the list page itself enforces sign-in.

pub mod admin;
pub mod auth;
pub mod stuff;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{Json, Redirect};
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const LIST_PATH: &str = "/list";

/// JSON error payload returned alongside non-2xx statuses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub(crate) type ApiError = (StatusCode, Json<ErrorBody>);

pub(crate) fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody { error: message.into() }))
}

/// API routes plus the root redirect.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_root_to_list))
        .route("/api/auth/signup", post(auth::sign_up))
        .route("/api/auth/signin", post(auth::sign_in))
        .route("/api/auth/signout", post(auth::sign_out))
        .route("/api/auth/change-password", post(auth::change_password))
        .route("/api/auth/session", get(auth::current_session))
        .route("/api/stuff", get(stuff::list_stuff).post(stuff::create_stuff))
        .route(
            "/api/stuff/{id}",
            get(stuff::get_stuff)
                .put(stuff::update_stuff)
                .delete(stuff::delete_stuff),
        )
        .route("/api/admin/stuff", get(admin::list_all_stuff))
        .route("/api/admin/users", get(admin::list_users))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Unconditional: session state is not consulted here.
async fn redirect_root_to_list() -> Redirect {
    Redirect::temporary(LIST_PATH)
}

/// API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
