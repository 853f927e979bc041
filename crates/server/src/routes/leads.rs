use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use common::types::Envelope;

use crate::errors::ApiError;
use crate::routes::auth::require_permission;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadFlagUpdate {
    pub id: Uuid,
    pub is_read: bool,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub id: Uuid,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct IdPayload {
    pub id: Uuid,
}

#[utoipa::path(get, path = "/api/admin/contacts", tag = "leads", responses((status = 200, description = "All contacts, newest first"), (status = 401, description = "No valid session")))]
pub async fn list_contacts(
    State(state): State<ServerState>,
    jar: CookieJar,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "view_contacts")?;
    let data = state.leads.list_contacts().await?;
    Ok(Json(Envelope::ok_with(json!(data))))
}

pub async fn update_contact_read(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(payload): Json<ReadFlagUpdate>,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "view_contacts")?;
    state.leads.set_contact_read(payload.id, payload.is_read).await?;
    Ok(Json(Envelope { success: true, ..Default::default() }))
}

pub async fn delete_contact(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(payload): Json<IdPayload>,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "delete_contacts")?;
    state.leads.delete_contact(payload.id).await?;
    Ok(Json(Envelope::ok_message("Record deleted")))
}

pub async fn list_consultations(
    State(state): State<ServerState>,
    jar: CookieJar,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "view_contacts")?;
    let data = state.leads.list_consultations().await?;
    Ok(Json(Envelope::ok_with(json!(data))))
}

pub async fn update_consultation_status(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(payload): Json<StatusUpdate>,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "view_contacts")?;
    state.leads.update_consultation_status(payload.id, &payload.status).await?;
    Ok(Json(Envelope { success: true, ..Default::default() }))
}

pub async fn delete_consultation(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(payload): Json<IdPayload>,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "delete_contacts")?;
    state.leads.delete_consultation(payload.id).await?;
    Ok(Json(Envelope { success: true, ..Default::default() }))
}

/// Dashboard counters for the admin overview.
pub async fn stats(
    State(state): State<ServerState>,
    jar: CookieJar,
) -> Result<Json<Envelope>, ApiError> {
    require_permission(&state, &jar, "view_contacts")?;
    let stats = state.leads.stats().await?;
    Ok(Json(Envelope::ok_with(json!(stats))))
}
