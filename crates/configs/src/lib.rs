use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Secret used when none is configured outside production. Deployed
/// instances must provide their own; `validate` rejects this path when the
/// production flag is set.
const DEV_FALLBACK_SECRET: &str = "dev-secret-change-me";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub sqlx_logging: bool,
}

/// Site layout knobs: where static assets and data files live, and the
/// path prefix the admin panel is served under.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_admin_path")]
    pub admin_path: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            admin_path: default_admin_path(),
            data_dir: default_data_dir(),
            frontend_dir: default_frontend_dir(),
        }
    }
}

fn default_admin_path() -> String { "/studio".into() }
fn default_data_dir() -> String { "data".into() }
fn default_frontend_dir() -> String { "frontend".into() }

/// The two fixed admin identities and the token signing secret.
///
/// There is no user table; these pairs are the whole credential set and
/// are read exactly once at startup.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthSettings {
    #[serde(default)]
    pub developer_email: String,
    #[serde(default)]
    pub developer_password: String,
    #[serde(default)]
    pub admin_email: String,
    #[serde(default)]
    pub admin_password: String,
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(default)]
    pub production: bool,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`), fall back to defaults when the
    /// file is absent, then fill gaps from the environment and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default().unwrap_or_default();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.site.normalize_from_env();
        self.auth.normalize_from_env();
        self.auth.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
        if self.url.trim().is_empty() {
            self.url = "sqlite://data/leads.db?mode=rwc".to_string();
        }
    }
}

impl SiteConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(path) = std::env::var("ADMIN_PANEL_URL") {
            if !path.trim().is_empty() {
                self.admin_path = path;
            }
        }
        if let Ok(dir) = std::env::var("DATA_DIR") {
            if !dir.trim().is_empty() {
                self.data_dir = dir;
            }
        }
        if let Ok(dir) = std::env::var("FRONTEND_DIR") {
            if !dir.trim().is_empty() {
                self.frontend_dir = dir;
            }
        }
    }
}

impl AuthSettings {
    pub fn normalize_from_env(&mut self) {
        let fill = |slot: &mut String, var: &str| {
            if slot.trim().is_empty() {
                if let Ok(v) = std::env::var(var) {
                    *slot = v;
                }
            }
        };
        fill(&mut self.developer_email, "DEVELOPER_EMAIL");
        fill(&mut self.developer_password, "DEVELOPER_PASSWORD");
        fill(&mut self.admin_email, "ADMIN_EMAIL");
        fill(&mut self.admin_password, "ADMIN_PASSWORD");
        fill(&mut self.jwt_secret, "JWT_SECRET");
        if !self.production {
            self.production = std::env::var("PRODUCTION")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false);
        }
    }

    /// A production instance must carry its own signing secret and both
    /// credential pairs; a development instance may run with the fallback
    /// secret and login disabled (empty pairs never match).
    pub fn validate(&mut self) -> Result<()> {
        if self.jwt_secret.trim().is_empty() {
            if self.production {
                return Err(anyhow!("auth.jwt_secret must be set when auth.production is enabled"));
            }
            self.jwt_secret = DEV_FALLBACK_SECRET.to_string();
        }
        if self.production {
            if self.developer_email.trim().is_empty() || self.developer_password.trim().is_empty() {
                return Err(anyhow!("developer credential pair must be set when auth.production is enabled"));
            }
            if self.admin_email.trim().is_empty() || self.admin_password.trim().is_empty() {
                return Err(anyhow!("admin credential pair must be set when auth.production is enabled"));
            }
        }
        Ok(())
    }
}
