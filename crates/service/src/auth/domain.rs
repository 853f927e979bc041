use serde::{Deserialize, Serialize};
use std::fmt;

/// The two fixed access levels of the admin panel.
///
/// `Developer` has full content-management access; `Admin` is limited to
/// the lead inbox. There is no user table, so this enum is the whole role
/// model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Developer,
    Admin,
}

impl Role {
    /// Static permission allow-list; a total function over the enum so an
    /// unknown role can never slip through.
    pub fn permissions(&self) -> &'static [&'static str] {
        match self {
            Role::Developer => &[
                "view_contacts",
                "delete_contacts",
                "manage_services",
                "manage_projects",
                "manage_testimonials",
                "manage_settings",
            ],
            Role::Admin => &["view_contacts", "delete_contacts"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "developer",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated admin identity, derived per-request from the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub role: Role,
}

/// Signed token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Login input
#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// One configured (email, password) pair; process-wide, read-only.
/// No `Debug` derive: the password must never reach a log line.
#[derive(Clone)]
pub struct CredentialPair {
    pub email: String,
    pub password: String,
}
