use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use common::types::Envelope;
use service::content::types::{GlobalData, Project, Service, Testimonial};

use crate::errors::ApiError;
use crate::routes::auth::require_permission;
use crate::state::ServerState;

// Whole-document read/replace for the editable site content. The typed
// `Json` extractor is the structural validation; business invariants like
// slug uniqueness stay with the editor producing the document.

pub async fn get_services(
    State(state): State<ServerState>,
    jar: CookieJar,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "manage_services")?;
    let data = state.content.services().await;
    Ok(Json(Envelope::ok_with(json!(data))))
}

pub async fn replace_services(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(doc): Json<Vec<Service>>,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "manage_services")?;
    state.content.replace_services(doc).await?;
    Ok(Json(Envelope::ok_message("Services updated successfully")))
}

pub async fn get_projects(
    State(state): State<ServerState>,
    jar: CookieJar,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "manage_projects")?;
    let data = state.content.projects().await;
    Ok(Json(Envelope::ok_with(json!(data))))
}

pub async fn replace_projects(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(doc): Json<Vec<Project>>,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "manage_projects")?;
    state.content.replace_projects(doc).await?;
    Ok(Json(Envelope::ok_message("Projects updated successfully")))
}

pub async fn get_testimonials(
    State(state): State<ServerState>,
    jar: CookieJar,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "manage_testimonials")?;
    let data = state.content.testimonials().await;
    Ok(Json(Envelope::ok_with(json!(data))))
}

pub async fn replace_testimonials(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(doc): Json<Vec<Testimonial>>,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "manage_testimonials")?;
    state.content.replace_testimonials(doc).await?;
    Ok(Json(Envelope::ok_message("Testimonials updated successfully")))
}

pub async fn get_settings(
    State(state): State<ServerState>,
    jar: CookieJar,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "manage_settings")?;
    let data = state.content.settings().await;
    Ok(Json(Envelope::ok_with(json!(data))))
}

pub async fn replace_settings(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(doc): Json<GlobalData>,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "manage_settings")?;
    state.content.replace_settings(doc).await?;
    Ok(Json(Envelope::ok_message("Settings updated successfully")))
}
