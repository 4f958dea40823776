//! Admin routes: cross-owner views gated on the `ADMIN` role.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;
use uuid::Uuid;

use super::auth::AdminUser;
use super::stuff::stuff_error_to_api;
use super::{ApiError, api_error};
use crate::services::stuff as stuff_svc;
use crate::state::AppState;
use crate::store::{Role, Stuff};

#[derive(Debug, Serialize)]
pub struct AdminUserRow {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

/// `GET /api/admin/stuff`: every record regardless of owner.
pub async fn list_all_stuff(State(state): State<AppState>, admin: AdminUser) -> Result<Json<Vec<Stuff>>, ApiError> {
    tracing::debug!(admin = %admin.user.email, "listing all stuff");
    let items = stuff_svc::list_all(state.store.as_ref())
        .await
        .map_err(stuff_error_to_api)?;
    Ok(Json(items))
}

/// `GET /api/admin/users`: every account and its role.
pub async fn list_users(State(state): State<AppState>, admin: AdminUser) -> Result<Json<Vec<AdminUserRow>>, ApiError> {
    tracing::debug!(admin = %admin.user.email, "listing users");
    let rows = state.store.list_users().await.map_err(|e| {
        tracing::error!(error = %e, "user listing failed");
        api_error(axum::http::StatusCode::INTERNAL_SERVER_ERROR, "internal error")
    })?;
    Ok(Json(
        rows.into_iter()
            .map(|u| AdminUserRow { id: u.id, email: u.email, role: u.role })
            .collect(),
    ))
}
