use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::guard;
use crate::state::ServerState;

pub mod auth;
pub mod content;
pub mod leads;
pub mod public;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public site + lead capture, auth,
/// and the admin API, with the page guard wrapped around everything.
pub fn build_router(state: ServerState, cors: CorsLayer, frontend_dir: &str) -> Router {
    let static_site = ServeDir::new(frontend_dir)
        .fallback(ServeFile::new(format!("{frontend_dir}/index.html")));

    // Public routes (lead capture + health)
    let public_api = Router::new()
        .route("/health", get(health))
        .route("/api/contact", post(public::submit_contact))
        .route("/api/consultation", post(public::submit_consultation));

    // Session management
    let auth_api = Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::session));

    // Admin API; every handler verifies the session cookie and its own
    // permission before touching a store.
    let admin_api = Router::new()
        .route(
            "/api/admin/contacts",
            get(leads::list_contacts)
                .patch(leads::update_contact_read)
                .delete(leads::delete_contact),
        )
        .route(
            "/api/admin/consultations",
            get(leads::list_consultations)
                .patch(leads::update_consultation_status)
                .delete(leads::delete_consultation),
        )
        .route("/api/admin/stats", get(leads::stats))
        .route("/api/admin/services", get(content::get_services).post(content::replace_services))
        .route("/api/admin/projects", get(content::get_projects).post(content::replace_projects))
        .route(
            "/api/admin/testimonials",
            get(content::get_testimonials).post(content::replace_testimonials),
        )
        .route("/api/admin/settings", get(content::get_settings).post(content::replace_settings));

    // Compose; static pages are the fallback so the admin pages go through
    // the same tree (and therefore the same guard) as everything else.
    public_api
        .merge(auth_api)
        .merge(admin_api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()))
        .fallback_service(static_site)
        .layer(middleware::from_fn_with_state(state.clone(), guard::protect_admin_pages))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
