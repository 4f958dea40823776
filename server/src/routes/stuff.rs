//! Stuff routes: the owner-scoped data behind the list and edit pages.
//!
//! Every handler takes [`AuthUser`], so anonymous requests are rejected by the
//! extractor before any handler body (and therefore any query) runs.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use super::auth::AuthUser;
use super::{ApiError, api_error};
use crate::services::stuff::{self as stuff_svc, StuffError, StuffInput};
use crate::state::AppState;
use crate::store::Stuff;

pub(crate) fn stuff_error_to_api(err: StuffError) -> ApiError {
    let status = match &err {
        StuffError::EmptyName
        | StuffError::NameTooLong
        | StuffError::NegativeQuantity
        | StuffError::UnknownCondition(_) => StatusCode::BAD_REQUEST,
        StuffError::NotFound(_) => StatusCode::NOT_FOUND,
        StuffError::Store(_) => {
            tracing::error!(error = %err, "stuff request failed");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "internal error");
        }
    };
    api_error(status, err.to_string())
}

/// `GET /api/stuff`: records owned by the session user.
pub async fn list_stuff(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<Stuff>>, ApiError> {
    let items = stuff_svc::list_for_owner(state.store.as_ref(), &auth.user.email)
        .await
        .map_err(stuff_error_to_api)?;
    Ok(Json(items))
}

/// `POST /api/stuff`: add a record owned by the session user.
pub async fn create_stuff(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<StuffInput>,
) -> Result<(StatusCode, Json<Stuff>), ApiError> {
    let stuff = stuff_svc::create(state.store.as_ref(), &auth.user.email, &body)
        .await
        .map_err(stuff_error_to_api)?;
    Ok((StatusCode::CREATED, Json(stuff)))
}

/// `GET /api/stuff/:id`
pub async fn get_stuff(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Stuff>, ApiError> {
    let stuff = stuff_svc::get(state.store.as_ref(), &auth.user.email, id)
        .await
        .map_err(stuff_error_to_api)?;
    Ok(Json(stuff))
}

/// `PUT /api/stuff/:id`
pub async fn update_stuff(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<StuffInput>,
) -> Result<Json<Stuff>, ApiError> {
    let stuff = stuff_svc::update(state.store.as_ref(), &auth.user.email, id, &body)
        .await
        .map_err(stuff_error_to_api)?;
    Ok(Json(stuff))
}

/// `DELETE /api/stuff/:id`
pub async fn delete_stuff(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    stuff_svc::delete(state.store.as_ref(), &auth.user.email, id)
        .await
        .map_err(stuff_error_to_api)?;
    Ok(StatusCode::NO_CONTENT)
}
