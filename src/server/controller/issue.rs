use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, ListQuery, PaginatedDto},
        issue::{IssueDto, IssueFilterDto, IssueFormDto, UpdateIssueStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            issue::{IssueFilter, IssueParams},
            scope::Scope,
        },
        service::issue::IssueService,
        state::AppState,
    },
};

/// Tag for grouping maintenance issue endpoints in OpenAPI documentation
pub static ISSUE_TAG: &str = "issue";

/// Get paginated maintenance issues visible to the caller.
///
/// Owners see issues on their properties, tenants the issues they reported and
/// providers the issues assigned to them.
///
/// # Access Control
/// - Any logged in user, rows limited by role
#[utoipa::path(
    get,
    path = "/api/issues",
    tag = ISSUE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("search" = Option<String>, Query, description = "Title contains"),
        ("status" = Option<String>, Query, description = "open, in_progress, resolved or closed"),
        ("priority" = Option<String>, Query, description = "low, medium, high or urgent"),
        ("property_id" = Option<i32>, Query, description = "Only issues on this property"),
        ("provider_id" = Option<i32>, Query, description = "Only issues assigned to this provider")
    ),
    responses(
        (status = 200, description = "Successfully retrieved issues", body = PaginatedDto<IssueDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_issues(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
    Query(filter): Query<IssueFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = IssueFilter::from_dto(query.search_term(), filter);
    let issues = IssueService::new(&state.db)
        .get_paginated(&Scope::for_user(&user), filter, query.page, query.per_page())
        .await?;

    Ok((StatusCode::OK, Json(issues.into_dto(|i| i.into_dto()))))
}

/// Get a single issue.
///
/// # Access Control
/// - Any logged in user who can see the issue
#[utoipa::path(
    get,
    path = "/api/issues/{id}",
    tag = ISSUE_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    responses(
        (status = 200, description = "Successfully retrieved issue", body = IssueDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_issue_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let issue = IssueService::new(&state.db)
        .get_by_id(&Scope::for_user(&user), id)
        .await?;

    Ok((StatusCode::OK, Json(issue.into_dto())))
}

/// Report a maintenance issue.
///
/// Staff can report issues on any property of the company and assign a provider.
/// Tenants can only report issues on properties where they hold an active
/// contract; the issue is linked to them and any provider in the payload is
/// ignored.
///
/// # Access Control
/// - `Staff` or a tenant with an active contract on the property
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Property, title, description, priority and optional links
///
/// # Returns
/// - `201 Created` - The new issue with status `open`
/// - `400 Bad Request` - Invalid data or references outside the company
/// - `403 Forbidden` - Role cannot report issues on this property
#[utoipa::path(
    post,
    path = "/api/issues",
    tag = ISSUE_TAG,
    request_body = IssueFormDto,
    responses(
        (status = 201, description = "Successfully created issue", body = IssueDto),
        (status = 400, description = "Invalid issue data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to report this issue", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_issue(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<IssueFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = IssueParams::from_dto(user.company_id, payload);
    let issue = IssueService::new(&state.db).create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(issue.into_dto())))
}

/// Update an issue, including its provider assignment.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    put,
    path = "/api/issues/{id}",
    tag = ISSUE_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    request_body = IssueFormDto,
    responses(
        (status = 200, description = "Successfully updated issue", body = IssueDto),
        (status = 400, description = "Invalid issue data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_issue(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<IssueFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = IssueParams::from_dto(user.company_id, payload);
    let issue = IssueService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(issue.into_dto())))
}

/// Move an issue to a new status.
///
/// Resolving or closing stamps `resolved_at`; reopening clears it.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    put,
    path = "/api/issues/{id}/status",
    tag = ISSUE_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    request_body = UpdateIssueStatusDto,
    responses(
        (status = 200, description = "Status changed", body = IssueDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_issue_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateIssueStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let issue = IssueService::new(&state.db)
        .set_status(user.company_id, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(issue.into_dto())))
}

/// Delete an issue.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    delete,
    path = "/api/issues/{id}",
    tag = ISSUE_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    responses(
        (status = 204, description = "Successfully deleted issue"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_issue(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    IssueService::new(&state.db)
        .delete(user.company_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
