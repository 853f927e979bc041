use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use service::auth::guard::{self, GuardDecision};

use crate::state::ServerState;

/// Name of the session cookie carried by the admin panel.
pub const AUTH_COOKIE: &str = "auth_token";

/// Session gate for the admin panel pages.
///
/// Wraps the framework-independent guard decision: everything outside the
/// admin prefix (including the whole JSON API) passes through untouched,
/// the login page stays reachable, and any other admin page needs a
/// verifiable session cookie. The API handlers run their own checks; this
/// layer only decides redirect-vs-pass for page loads.
pub async fn protect_admin_pages(
    State(state): State<ServerState>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let token = jar.get(AUTH_COOKIE).map(|c| c.value().to_string());
    let decision = guard::decide(&state.auth, &state.admin_path, req.uri().path(), token.as_deref());
    let login = guard::login_path(&state.admin_path);
    match decision {
        GuardDecision::Pass => next.run(req).await,
        GuardDecision::RedirectToLogin => Redirect::to(&login).into_response(),
        GuardDecision::ClearCookieAndRedirect => {
            let mut removal = Cookie::from(AUTH_COOKIE);
            removal.set_path("/");
            (jar.remove(removal), Redirect::to(&login)).into_response()
        }
    }
}
