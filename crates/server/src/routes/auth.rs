use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::json;

use common::types::Envelope;
use service::auth::domain::{Identity, LoginInput};

use crate::errors::ApiError;
use crate::guard::AUTH_COOKIE;
use crate::state::ServerState;

/// Resolve the session cookie to an identity, or fail with 401.
pub(crate) fn require_identity(state: &ServerState, jar: &CookieJar) -> Result<Identity, ApiError> {
    jar.get(AUTH_COOKIE)
        .and_then(|cookie| state.auth.verify_token(cookie.value()))
        .ok_or(ApiError::Unauthorized)
}

/// Resolve the session and check one permission; both failures map to the
/// same 401 so callers learn nothing about which check tripped.
pub(crate) fn require_permission(
    state: &ServerState,
    jar: &CookieJar,
    permission: &str,
) -> Result<Identity, ApiError> {
    let identity = require_identity(state, jar)?;
    if !state.auth.has_permission(&identity, permission) {
        return Err(ApiError::Unauthorized);
    }
    Ok(identity)
}

#[utoipa::path(post, path = "/api/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in, session cookie set"), (status = 401, description = "Invalid credentials")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<Envelope>), ApiError> {
    let identity = state
        .auth
        .authenticate(&input.email, &input.password)
        .ok_or(ApiError::InvalidCredentials)?;
    let token = state
        .auth
        .issue_token(&identity)
        .map_err(|e| ApiError::Storage(e.to_string()))?;

    let mut cookie = Cookie::new(AUTH_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(SameSite::Lax);
    let jar = jar.add(cookie);

    let body = Envelope::ok_with(json!({"user": {"email": identity.email, "role": identity.role}}));
    Ok((jar, Json(body)))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Envelope>) {
    let mut removal = Cookie::from(AUTH_COOKIE);
    removal.set_path("/");
    (jar.remove(removal), Json(Envelope::ok_message("Logged out")))
}

/// Session check consumed by the admin panel on load; answers with the
/// identity behind a valid cookie and a plain `authenticated: false`
/// otherwise.
pub async fn session(
    State(state): State<ServerState>,
    jar: CookieJar,
) -> (StatusCode, Json<serde_json::Value>) {
    match jar.get(AUTH_COOKIE).and_then(|c| state.auth.verify_token(c.value())) {
        Some(identity) => (
            StatusCode::OK,
            Json(json!({
                "authenticated": true,
                "user": {"email": identity.email, "role": identity.role},
            })),
        ),
        None => (StatusCode::UNAUTHORIZED, Json(json!({"authenticated": false}))),
    }
}
