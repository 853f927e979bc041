use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use tracing::{debug, info, instrument};

use super::domain::{Claims, CredentialPair, Identity, Role};
use super::errors::AuthError;

/// Auth service configuration: the two fixed credential pairs, the token
/// signing secret, and the token lifetime. Built once at startup and never
/// mutated afterwards.
#[derive(Clone)]
pub struct AuthConfig {
    pub developer: CredentialPair,
    pub admin: CredentialPair,
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Standard configuration with the 7-day session lifetime.
    pub fn new(developer: CredentialPair, admin: CredentialPair, jwt_secret: String) -> Self {
        Self { developer, admin, jwt_secret, token_ttl: Duration::days(7) }
    }
}

/// Auth business service independent of web framework.
///
/// Credential checks run against the configured pairs only; there is no
/// user table, no lockout, and no rate limiting. Brute-force protection
/// belongs to a surrounding network layer.
pub struct AuthService {
    cfg: AuthConfig,
}

impl AuthService {
    pub fn new(cfg: AuthConfig) -> Self { Self { cfg } }

    /// Check an (email, password) pair against the two configured identities.
    ///
    /// # Examples
    /// ```
    /// use service::auth::domain::{CredentialPair, Role};
    /// use service::auth::service::{AuthConfig, AuthService};
    /// let svc = AuthService::new(AuthConfig::new(
    ///     CredentialPair { email: "dev@studio.test".into(), password: "devpass".into() },
    ///     CredentialPair { email: "inbox@studio.test".into(), password: "inboxpass".into() },
    ///     "secret".into(),
    /// ));
    /// let identity = svc.authenticate("dev@studio.test", "devpass").unwrap();
    /// assert_eq!(identity.role, Role::Developer);
    /// assert!(svc.authenticate("dev@studio.test", "inboxpass").is_none());
    /// ```
    #[instrument(skip(self, password), fields(email = %email))]
    pub fn authenticate(&self, email: &str, password: &str) -> Option<Identity> {
        let pairs = [(&self.cfg.developer, Role::Developer), (&self.cfg.admin, Role::Admin)];
        for (pair, role) in pairs {
            // An unconfigured (empty) pair never matches.
            if pair.email.is_empty() || pair.password.is_empty() {
                continue;
            }
            if pair.email == email && pair.password == password {
                info!(role = %role, "admin_authenticated");
                return Some(Identity { email: email.to_string(), role });
            }
        }
        None
    }

    /// Sign a session token carrying the identity, valid for the configured
    /// lifetime (7 days).
    pub fn issue_token(&self, identity: &Identity) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: identity.email.clone(),
            role: identity.role,
            iat: now.timestamp(),
            exp: (now + self.cfg.token_ttl).timestamp(),
        };
        encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }

    /// Verify signature and expiry; every failure collapses to `None` so a
    /// caller can never distinguish malformed, expired, and tampered tokens.
    pub fn verify_token(&self, token: &str) -> Option<Identity> {
        let key = DecodingKey::from_secret(self.cfg.jwt_secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        match decode::<Claims>(token, &key, &validation) {
            Ok(data) => Some(Identity { email: data.claims.sub, role: data.claims.role }),
            Err(e) => {
                debug!(err = %e, "token rejected");
                None
            }
        }
    }

    /// Deny-by-default permission lookup over the static role mapping.
    pub fn has_permission(&self, identity: &Identity, permission: &str) -> bool {
        identity.role.permissions().contains(&permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> AuthService {
        AuthService::new(AuthConfig::new(
            CredentialPair { email: "dev@studio.test".into(), password: "devpass".into() },
            CredentialPair { email: "inbox@studio.test".into(), password: "inboxpass".into() },
            "test-secret".into(),
        ))
    }

    #[test]
    fn authenticate_matches_exactly_the_configured_pairs() {
        let svc = test_service();
        assert_eq!(svc.authenticate("dev@studio.test", "devpass").unwrap().role, Role::Developer);
        assert_eq!(svc.authenticate("inbox@studio.test", "inboxpass").unwrap().role, Role::Admin);

        // Wrong password, unknown email, and crossed pairs all fail alike.
        assert!(svc.authenticate("dev@studio.test", "wrong").is_none());
        assert!(svc.authenticate("nobody@studio.test", "devpass").is_none());
        assert!(svc.authenticate("dev@studio.test", "inboxpass").is_none());
        assert!(svc.authenticate("", "").is_none());
    }

    #[test]
    fn unconfigured_pair_never_matches() {
        let svc = AuthService::new(AuthConfig::new(
            CredentialPair { email: String::new(), password: String::new() },
            CredentialPair { email: "inbox@studio.test".into(), password: "inboxpass".into() },
            "test-secret".into(),
        ));
        assert!(svc.authenticate("", "").is_none());
        assert!(svc.authenticate("inbox@studio.test", "inboxpass").is_some());
    }

    #[test]
    fn token_round_trip_returns_the_same_identity() {
        let svc = test_service();
        let identity = Identity { email: "dev@studio.test".into(), role: Role::Developer };
        let token = svc.issue_token(&identity).expect("issue");
        assert_eq!(svc.verify_token(&token), Some(identity));
    }

    #[test]
    fn expired_token_is_rejected() {
        let svc = test_service();
        // Craft a token whose expiry is well past the validation leeway.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "dev@studio.test".into(),
            role: Role::Developer,
            iat: now - 8 * 24 * 3600,
            exp: now - 24 * 3600,
        };
        let token = encode(
            &JwtHeader::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .expect("encode");
        assert!(svc.verify_token(&token).is_none());
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let svc = test_service();
        let identity = Identity { email: "dev@studio.test".into(), role: Role::Developer };
        let token = svc.issue_token(&identity).expect("issue");

        let mut tampered = token.clone().into_bytes();
        let last = tampered.last_mut().expect("nonempty");
        *last = if *last == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).expect("utf8");
        assert_ne!(tampered, token);
        assert!(svc.verify_token(&tampered).is_none());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let svc = test_service();
        let other = AuthService::new(AuthConfig::new(
            CredentialPair { email: "dev@studio.test".into(), password: "devpass".into() },
            CredentialPair { email: "inbox@studio.test".into(), password: "inboxpass".into() },
            "another-secret".into(),
        ));
        let identity = Identity { email: "dev@studio.test".into(), role: Role::Developer };
        let token = other.issue_token(&identity).expect("issue");
        assert!(svc.verify_token(&token).is_none());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let svc = test_service();
        assert!(svc.verify_token("").is_none());
        assert!(svc.verify_token("not-a-token").is_none());
    }

    #[test]
    fn permissions_are_deny_by_default() {
        let svc = test_service();
        let dev = Identity { email: "dev@studio.test".into(), role: Role::Developer };
        let admin = Identity { email: "inbox@studio.test".into(), role: Role::Admin };

        assert!(svc.has_permission(&dev, "manage_services"));
        assert!(svc.has_permission(&dev, "delete_contacts"));
        assert!(svc.has_permission(&admin, "view_contacts"));
        assert!(!svc.has_permission(&admin, "manage_services"));
        assert!(!svc.has_permission(&dev, "unknown_permission"));
    }

    #[test]
    fn developer_permissions_are_a_superset_of_admin() {
        for p in Role::Admin.permissions() {
            assert!(Role::Developer.permissions().contains(p));
        }
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Developer).unwrap(), "\"developer\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }
}
