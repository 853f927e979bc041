use super::service::AuthService;

/// Outcome of the admin route guard for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the request reach its handler untouched.
    Pass,
    /// No session: send the client to the login page.
    RedirectToLogin,
    /// A token was presented but failed verification: redirect and tell the
    /// client to drop the cookie so the bad token is not retried forever.
    ClearCookieAndRedirect,
}

/// Login page under the admin prefix; always reachable.
pub fn login_path(admin_path: &str) -> String {
    format!("{}/login", admin_path.trim_end_matches('/'))
}

/// Decide pass-through vs redirect for one request, from the path and the
/// session cookie alone.
///
/// Only paths under `admin_path` pay any verification cost. The guard
/// checks session presence, not permissions; per-role authorization stays
/// with the individual handlers.
pub fn decide(auth: &AuthService, admin_path: &str, path: &str, token: Option<&str>) -> GuardDecision {
    if !path.starts_with(admin_path) {
        return GuardDecision::Pass;
    }
    if path == login_path(admin_path) {
        return GuardDecision::Pass;
    }
    match token {
        None => GuardDecision::RedirectToLogin,
        Some(token) => {
            if auth.verify_token(token).is_some() {
                GuardDecision::Pass
            } else {
                GuardDecision::ClearCookieAndRedirect
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::{CredentialPair, Identity, Role};
    use crate::auth::service::AuthConfig;

    fn test_auth() -> AuthService {
        AuthService::new(AuthConfig::new(
            CredentialPair { email: "dev@studio.test".into(), password: "devpass".into() },
            CredentialPair { email: "inbox@studio.test".into(), password: "inboxpass".into() },
            "test-secret".into(),
        ))
    }

    #[test]
    fn public_paths_pass_without_a_token() {
        let auth = test_auth();
        assert_eq!(decide(&auth, "/studio", "/", None), GuardDecision::Pass);
        assert_eq!(decide(&auth, "/studio", "/projects/loft", None), GuardDecision::Pass);
        assert_eq!(decide(&auth, "/studio", "/api/contact", None), GuardDecision::Pass);
    }

    #[test]
    fn login_page_is_always_reachable() {
        let auth = test_auth();
        assert_eq!(decide(&auth, "/studio", "/studio/login", None), GuardDecision::Pass);
        assert_eq!(decide(&auth, "/studio", "/studio/login", Some("garbage")), GuardDecision::Pass);
    }

    #[test]
    fn admin_page_without_token_redirects() {
        let auth = test_auth();
        assert_eq!(decide(&auth, "/studio", "/studio", None), GuardDecision::RedirectToLogin);
        assert_eq!(decide(&auth, "/studio", "/studio/anything", None), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn admin_page_with_bad_token_clears_the_cookie() {
        let auth = test_auth();
        assert_eq!(
            decide(&auth, "/studio", "/studio/projects", Some("garbage")),
            GuardDecision::ClearCookieAndRedirect
        );
        assert_eq!(
            decide(&auth, "/studio", "/studio/projects", Some("")),
            GuardDecision::ClearCookieAndRedirect
        );
    }

    #[test]
    fn admin_page_with_valid_token_passes() {
        let auth = test_auth();
        let token = auth
            .issue_token(&Identity { email: "dev@studio.test".into(), role: Role::Developer })
            .expect("issue");
        assert_eq!(decide(&auth, "/studio", "/studio/projects", Some(&token)), GuardDecision::Pass);
    }

    #[test]
    fn login_path_normalizes_trailing_slash() {
        assert_eq!(login_path("/studio"), "/studio/login");
        assert_eq!(login_path("/studio/"), "/studio/login");
    }
}
