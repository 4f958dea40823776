//! Auth routes and the session-cookie extractors.

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use super::{ApiError, api_error};
use crate::services::auth::{self as auth_svc, AuthError};
use crate::services::protection::{self, Protection};
use crate::services::session::{self, SessionUser};
use crate::state::AppState;

pub const COOKIE_NAME: &str = "session_token";

// =============================================================================
// COOKIES
// =============================================================================

fn session_cookie(token: String, secure: bool, ttl_hours: u32) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::hours(i64::from(ttl_hours)))
        .build()
}

fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTORS
// =============================================================================

#[derive(Serialize)]
struct ProtectionBody {
    error: &'static str,
    redirect: &'static str,
}

/// Rejection for protected requests: status plus the page a browser should
/// be sent to.
fn protection_response(protection: Protection) -> Response {
    let error = match protection {
        Protection::SignIn => "sign in required",
        Protection::NotAuthorized => "not authorized",
    };
    let body = ProtectionBody { error, redirect: protection.redirect_path() };
    (protection.status(), Json(body)).into_response()
}

/// Resolve the session cookie, if any, to a user.
async fn resolve_session(state: &AppState, parts: &Parts) -> Result<Option<SessionUser>, Response> {
    let jar = CookieJar::from_headers(&parts.headers);
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    session::validate_session(state.store.as_ref(), token)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "session lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
}

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require a signed-in user; the handler body
/// never runs for anonymous requests.
pub struct AuthUser {
    pub user: SessionUser,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let session = resolve_session(&app_state, parts).await?;
        let user = protection::logged_in_protected(session.as_ref()).map_err(protection_response)?;
        Ok(Self { user: user.clone() })
    }
}

/// Like [`AuthUser`], but additionally requires the `ADMIN` role.
pub struct AdminUser {
    pub user: SessionUser,
}

impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let session = resolve_session(&app_state, parts).await?;
        let user = protection::admin_protected(session.as_ref()).map_err(protection_response)?;
        Ok(Self { user: user.clone() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct CredentialsBody {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ChangePasswordBody {
    pub old_password: String,
    pub password: String,
    pub confirm_password: String,
}

pub(crate) fn auth_error_to_api(err: AuthError) -> ApiError {
    let status = match &err {
        AuthError::InvalidEmail | AuthError::WeakPassword | AuthError::PasswordMismatch => StatusCode::BAD_REQUEST,
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::EmailTaken => StatusCode::CONFLICT,
        AuthError::Hash(_) | AuthError::Store(_) => {
            tracing::error!(error = %err, "auth request failed");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "internal error");
        }
    };
    api_error(status, err.to_string())
}

async fn open_session(state: &AppState, jar: CookieJar, user: SessionUser) -> Result<(CookieJar, SessionUser), ApiError> {
    if let Err(e) = session::prune_expired_sessions(state.store.as_ref()).await {
        tracing::warn!(error = %e, "expired session prune failed");
    }
    let token = session::create_session(state.store.as_ref(), user.id, state.auth.session_ttl_hours)
        .await
        .map_err(|e| auth_error_to_api(e.into()))?;
    let cookie = session_cookie(token, state.auth.cookie_secure, state.auth.session_ttl_hours);
    Ok((jar.add(cookie), user))
}

/// `POST /api/auth/signup`: create a `USER` account and sign it in.
pub async fn sign_up(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<CredentialsBody>,
) -> Result<impl IntoResponse, ApiError> {
    let user = auth_svc::sign_up(state.store.as_ref(), &body.email, &body.password)
        .await
        .map_err(auth_error_to_api)?;
    let (jar, user) = open_session(&state, jar, user.into()).await?;
    Ok((jar, (StatusCode::CREATED, Json(user))))
}

/// `POST /api/auth/signin`: verify credentials and set the session cookie.
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<CredentialsBody>,
) -> Result<impl IntoResponse, ApiError> {
    let user = auth_svc::sign_in(state.store.as_ref(), &body.email, &body.password)
        .await
        .map_err(|e| {
            if matches!(e, AuthError::InvalidCredentials) {
                tracing::warn!("sign-in rejected");
            }
            auth_error_to_api(e)
        })?;
    let (jar, user) = open_session(&state, jar, user.into()).await?;
    Ok((jar, Json(user)))
}

/// `POST /api/auth/signout`: delete the session (if any) and clear the cookie.
pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default().to_owned();
    if !token.is_empty() {
        if let Err(e) = session::delete_session(state.store.as_ref(), &token).await {
            tracing::warn!(error = %e, "session delete failed");
        }
    }
    let jar = jar.add(cleared_session_cookie(state.auth.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

/// `POST /api/auth/change-password`: rotate the signed-in user's password
/// and sign out every other session of that user.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
    Json(body): Json<ChangePasswordBody>,
) -> Result<StatusCode, ApiError> {
    auth_svc::change_password(
        state.store.as_ref(),
        auth.user.id,
        &auth.user.email,
        &body.old_password,
        &body.password,
        &body.confirm_password,
    )
    .await
    .map_err(auth_error_to_api)?;

    let current = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    session::revoke_other_sessions(state.store.as_ref(), auth.user.id, current)
        .await
        .map_err(|e| auth_error_to_api(e.into()))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/auth/session`: return the current session user.
pub async fn current_session(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
