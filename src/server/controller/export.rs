use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, report::FinancialReportQuery},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            export::{Export, ExportEntity},
            scope::Scope,
        },
        service::{export::ExportService, report::ReportService},
        state::AppState,
    },
};

/// Tag for grouping export endpoints in OpenAPI documentation
pub static EXPORT_TAG: &str = "export";

/// Wraps a generated document into a download response.
pub(super) fn attachment(export: Export) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, export.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.file_name),
            ),
        ],
        export.bytes,
    )
        .into_response()
}

/// Export every record of one kind as an xlsx workbook.
///
/// # Access Control
/// - `Staff` - Only admins and managers can export
///
/// # Arguments
/// - `entity` - One of owners, tenants, providers, properties, contracts, issues, offers
///
/// # Returns
/// - `200 OK` - Workbook download
/// - `400 Bad Request` - Unknown entity
/// - `403 Forbidden` - User is not staff
#[utoipa::path(
    get,
    path = "/api/export/{entity}",
    tag = EXPORT_TAG,
    params(("entity" = String, Path, description = "owners, tenants, providers, properties, contracts, issues or offers")),
    responses(
        (status = 200, description = "Workbook", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 400, description = "Unknown entity", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_entity(
    State(state): State<AppState>,
    session: Session,
    Path(entity): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let entity = entity
        .parse::<ExportEntity>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let export = ExportService::new(&state.db)
        .entity_workbook(user.company_id, entity)
        .await?;

    Ok(attachment(export))
}

/// Export the financial report of a year or month as an xlsx workbook.
///
/// # Access Control
/// - `Staff` - Only admins and managers can export
///
/// # Returns
/// - `200 OK` - Workbook with a property and an owner sheet
/// - `400 Bad Request` - Invalid period
#[utoipa::path(
    get,
    path = "/api/export/report",
    tag = EXPORT_TAG,
    params(
        ("year" = i32, Query, description = "Report year"),
        ("month" = Option<u32>, Query, description = "Month 1-12, whole year when absent"),
        ("owner_id" = Option<i32>, Query, description = "Only this owner's properties")
    ),
    responses(
        (status = 200, description = "Workbook", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_report(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<FinancialReportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let report = ReportService::new(&state.db)
        .financial(
            &Scope::company(user.company_id),
            query.year,
            query.month,
            query.owner_id,
        )
        .await?;

    let export = ExportService::new(&state.db).report_workbook(&report)?;

    Ok(attachment(export))
}
