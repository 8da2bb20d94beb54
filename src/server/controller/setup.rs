use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use dioxus_logger::tracing;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{api::ErrorDto, auth::SetupDto, user::UserDto},
    server::{
        error::AppError, middleware::session::AuthSession, service::setup::SetupService,
        state::AppState,
    },
};

/// Tag for grouping setup endpoints in OpenAPI documentation
pub static SETUP_TAG: &str = "setup";

/// Create the first company and its admin account.
///
/// Consumes the one-time setup code logged at startup, creates the company and
/// its admin in one transaction and logs the new admin in.
///
/// # Access Control
/// - Public - Requires the setup code; refused once an admin exists
///
/// # Arguments
/// - `state` - Application state containing the database and setup code service
/// - `session` - Session the new admin is logged into
/// - `payload` - Setup code, company name, admin name, email and password
///
/// # Returns
/// - `201 Created` - The created admin user
/// - `400 Bad Request` - Invalid payload or email already registered
/// - `403 Forbidden` - Wrong, expired or used setup code
#[utoipa::path(
    post,
    path = "/api/setup",
    tag = SETUP_TAG,
    request_body = SetupDto,
    responses(
        (status = 201, description = "Company and admin created", body = UserDto),
        (status = 400, description = "Invalid setup data", body = ErrorDto),
        (status = 403, description = "Invalid setup code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn setup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SetupDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let (company, admin) = SetupService::new(&state.db, &state.setup_codes)
        .run(payload)
        .await?;

    AuthSession::new(&session).set_user_id(admin.id).await?;

    tracing::info!(
        "Setup completed: company {} ({}) with admin {}",
        company.name,
        company.id,
        admin.email
    );

    Ok((StatusCode::CREATED, Json(admin.into_dto())))
}
