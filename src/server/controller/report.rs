use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        report::{DashboardDto, FinancialReportDto, FinancialReportQuery},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        model::scope::{Scope, Visibility},
        service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Compute the financial report for a year or a single month.
///
/// Income, management fee, expenses and net are computed per property and per
/// owner at read time. Owner accounts always get their own report, whatever
/// `owner_id` says.
///
/// # Access Control
/// - `Staff` - Any owner or the whole company
/// - Owner accounts - Their own properties only
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `query` - Year, optional month and optional owner filter
///
/// # Returns
/// - `200 OK` - Report rows and totals
/// - `400 Bad Request` - Month outside 1-12
/// - `403 Forbidden` - Tenant or provider account
#[utoipa::path(
    get,
    path = "/api/reports/financial",
    tag = REPORT_TAG,
    params(
        ("year" = i32, Query, description = "Report year"),
        ("month" = Option<u32>, Query, description = "Month 1-12, whole year when absent"),
        ("owner_id" = Option<i32>, Query, description = "Only this owner's properties")
    ),
    responses(
        (status = 200, description = "Financial report", body = FinancialReportDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Role cannot view financial reports", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_financial_report(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<FinancialReportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let scope = Scope::for_user(&user);
    if !matches!(scope.visibility, Visibility::Company | Visibility::Owner(_)) {
        return Err(AuthError::AccessDenied(
            user.id,
            format!("{} user requested a financial report", user.role),
        )
        .into());
    }

    let report = ReportService::new(&state.db)
        .financial(&scope, query.year, query.month, query.owner_id)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Get the dashboard counters visible to the caller.
///
/// # Access Control
/// - Any logged in user, counts limited by role
#[utoipa::path(
    get,
    path = "/api/reports/dashboard",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Dashboard counters", body = DashboardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let dashboard = ReportService::new(&state.db)
        .dashboard(&Scope::for_user(&user))
        .await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}
