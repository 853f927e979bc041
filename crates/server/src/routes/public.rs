use axum::{extract::State, http::{header, HeaderMap, StatusCode}, Json};
use serde::Deserialize;
use serde_json::json;

use common::types::Envelope;
use models::{consultation, contact};

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub budget_range: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn header_or_unknown(headers: &HeaderMap, name: impl header::AsHeaderName) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// Validate the submission field by field so the form can surface every
/// problem at once, not just the first.
fn field_errors(submission: &ContactSubmission) -> serde_json::Map<String, serde_json::Value> {
    let mut errors = serde_json::Map::new();
    if let Err(e) = contact::validate_name(&submission.name) {
        errors.insert("name".into(), json!([e.to_string()]));
    }
    if let Err(e) = contact::validate_email(&submission.email) {
        errors.insert("email".into(), json!([e.to_string()]));
    }
    if let Err(e) = contact::validate_message(&submission.message) {
        errors.insert("message".into(), json!([e.to_string()]));
    }
    errors
}

#[utoipa::path(post, path = "/api/contact", tag = "public", request_body = crate::openapi::ContactSubmissionDoc, responses((status = 201, description = "Submission received"), (status = 400, description = "Field validation failed")))]
pub async fn submit_contact(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(submission): Json<ContactSubmission>,
) -> Result<(StatusCode, Json<Envelope>), ApiError> {
    let errors = field_errors(&submission);
    if !errors.is_empty() {
        return Err(ApiError::Validation(json!({"formErrors": [], "fieldErrors": errors})));
    }

    let ip = header_or_unknown(&headers, "x-forwarded-for");
    let user_agent = header_or_unknown(&headers, header::USER_AGENT);

    state
        .leads
        .create_contact(contact::NewContact {
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            message: submission.message,
            ip_address: Some(ip),
            user_agent: Some(user_agent),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(Envelope::ok_message("Submission received"))))
}

#[utoipa::path(post, path = "/api/consultation", tag = "public", request_body = crate::openapi::ConsultationRequestDoc, responses((status = 200, description = "Consultation request scheduled"), (status = 400, description = "Name or email missing")))]
pub async fn submit_consultation(
    State(state): State<ServerState>,
    Json(request): Json<ConsultationRequest>,
) -> Result<Json<Envelope>, ApiError> {
    let name = request.name.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let email = request.email.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let (name, email) = match (name, email) {
        (Some(name), Some(email)) => (name.to_string(), email.to_string()),
        _ => return Err(ApiError::BadRequest("Name and Email are required".into())),
    };

    state
        .leads
        .create_consultation(consultation::NewConsultation {
            name,
            email,
            phone: request.phone,
            project_type: request.project_type,
            budget_range: request.budget_range,
            description: request.description,
        })
        .await?;

    Ok(Json(Envelope::ok_message("Consultation request scheduled")))
}
