//! Auth routes: session lookup, logout, sign-in redirect, dev sessions.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::session;
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(30))
        .build()
}

pub(crate) fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated viewer extracted from the session cookie.
/// Use as a handler parameter to require a session.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me`: return the current viewer.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, "session delete failed");
    }

    let jar = CookieJar::new().add(cleared_session_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

/// `GET /auth/signin`: hand off to the external sign-in page.
pub async fn sign_in(State(state): State<AppState>) -> Response {
    match state.config.sign_in_url.as_deref() {
        Some(url) => Redirect::temporary(url).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "sign-in not configured").into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct DevSessionBody {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// `POST /api/dev/session`: create a user and session without an external
/// provider.
///
/// Enabled only when `DEV_AUTH_BYPASS=true`.
pub async fn dev_session(
    State(state): State<AppState>,
    Json(body): Json<DevSessionBody>,
) -> Result<(CookieJar, Json<session::SessionUser>), StatusCode> {
    if !state.config.dev_auth_bypass {
        return Err(StatusCode::NOT_FOUND);
    }
    let name = body.name.trim();
    if name.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let image = body.image.as_deref().map(str::trim).filter(|v| !v.is_empty());

    let user_id = session::create_user(&state.pool, name, image)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "dev user creation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    let token = session::create_session(&state.pool, user_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "session creation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    tracing::info!(%user_id, "dev session created");
    let jar = CookieJar::new().add(session_cookie(token, state.config.cookie_secure));
    let user = session::SessionUser { id: user_id, name: name.to_owned(), image: image.map(str::to_owned) };
    Ok((jar, Json(user)))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
