use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(utoipa::ToSchema)]
pub struct ContactSubmissionDoc {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

#[derive(utoipa::ToSchema)]
pub struct ConsultationRequestDoc {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub project_type: Option<String>,
    pub budget_range: Option<String>,
    pub description: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::public::submit_contact,
        crate::routes::public::submit_consultation,
        crate::routes::auth::login,
        crate::routes::leads::list_contacts,
    ),
    components(
        schemas(
            HealthResponse,
            LoginRequest,
            ContactSubmissionDoc,
            ConsultationRequestDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "public"),
        (name = "auth"),
        (name = "leads")
    )
)]
pub struct ApiDoc;
