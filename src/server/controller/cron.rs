use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{api::ErrorDto, workflow::WorkflowRunDto},
    server::{
        error::{auth::AuthError, AppError},
        state::AppState,
    },
};

/// Tag for grouping scheduled job endpoints in OpenAPI documentation
pub static CRON_TAG: &str = "cron";

/// Header carrying the shared cron secret.
pub const CRON_SECRET_HEADER: &str = "x-cron-secret";

/// POST /api/cron/workflows - Run all workflow steps now
///
/// Lets an external scheduler trigger the same run the in-process scheduler
/// performs daily. Every step runs even when an earlier one fails.
///
/// # Authentication
/// Header `X-Cron-Secret` must equal the configured `CRON_SECRET`. The endpoint
/// does not exist when no secret is configured.
///
/// # Returns
/// - `200 OK`: processed count and error per step
/// - `403 Forbidden`: missing or wrong secret
/// - `404 Not Found`: no secret configured
#[utoipa::path(
    post,
    path = "/api/cron/workflows",
    tag = CRON_TAG,
    params(("X-Cron-Secret" = String, Header, description = "Shared cron secret")),
    responses(
        (status = 200, description = "Workflow run summary", body = WorkflowRunDto),
        (status = 403, description = "Invalid cron secret", body = ErrorDto),
        (status = 404, description = "Cron endpoint disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn run_workflows(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let Some(secret) = state.config.cron_secret.as_deref() else {
        return Err(AppError::NotFound("Not found".to_string()));
    };

    let provided = headers
        .get(CRON_SECRET_HEADER)
        .and_then(|v| v.to_str().ok());
    if provided != Some(secret) {
        return Err(AuthError::InvalidCronSecret.into());
    }

    tracing::info!("Workflow run triggered over HTTP");

    let run = state.workflow().run().await;

    Ok((StatusCode::OK, Json(run.into_dto())))
}
