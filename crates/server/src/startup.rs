use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use migration::MigratorTrait;
use service::auth::domain::CredentialPair;
use service::auth::service::{AuthConfig, AuthService};
use service::content::store::ContentStore;
use service::leads::{repository::SeaOrmLeadRepository, service::LeadService};
use service::runtime;

use crate::routes;
use crate::state::ServerState;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn auth_config(cfg: &configs::AuthSettings) -> AuthConfig {
    AuthConfig::new(
        CredentialPair {
            email: cfg.developer_email.clone(),
            password: cfg.developer_password.clone(),
        },
        CredentialPair {
            email: cfg.admin_email.clone(),
            password: cfg.admin_password.clone(),
        },
        cfg.jwt_secret.clone(),
    )
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // Immutable configuration, loaded exactly once. A production-flagged
    // instance without a signing secret fails here, before binding.
    let cfg = configs::AppConfig::load_and_validate()?;

    runtime::ensure_env(&cfg.site.frontend_dir, &cfg.site.data_dir).await?;

    // Leads database (SQLite) with schema applied at boot
    let db = models::db::connect_to(&cfg.database.url).await?;
    migration::Migrator::up(&db, None).await?;

    // Content documents under the data directory
    let content = ContentStore::new(&cfg.site.data_dir).await?;

    let state = ServerState {
        auth: Arc::new(AuthService::new(auth_config(&cfg.auth))),
        leads: Arc::new(LeadService::new(Arc::new(SeaOrmLeadRepository { db }))),
        content,
        admin_path: cfg.site.admin_path.clone(),
    };

    // Build router
    let app: Router = routes::build_router(state, build_cors(), &cfg.site.frontend_dir);

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, admin_path = %cfg.site.admin_path, "starting studio site server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
