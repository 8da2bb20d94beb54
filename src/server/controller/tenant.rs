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
        tenant::{TenantDto, TenantFormDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::tenant::TenantParams,
        service::tenant::TenantService,
        state::AppState,
    },
};

/// Tag for grouping tenant endpoints in OpenAPI documentation
pub static TENANT_TAG: &str = "tenant";

/// Get paginated tenants of the caller's company.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/tenants",
    tag = TENANT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("search" = Option<String>, Query, description = "Name contains")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tenants", body = PaginatedDto<TenantDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tenants(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let tenants = TenantService::new(&state.db)
        .get_paginated(
            user.company_id,
            query.search_term(),
            query.page,
            query.per_page(),
        )
        .await?;

    Ok((StatusCode::OK, Json(tenants.into_dto(|t| t.into_dto()))))
}

/// Get a single tenant.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/tenants/{id}",
    tag = TENANT_TAG,
    params(("id" = i32, Path, description = "Tenant ID")),
    responses(
        (status = 200, description = "Successfully retrieved tenant", body = TenantDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Tenant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tenant_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let tenant = TenantService::new(&state.db)
        .get_by_id(user.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(tenant.into_dto())))
}

/// Create a new tenant.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/tenants",
    tag = TENANT_TAG,
    request_body = TenantFormDto,
    responses(
        (status = 201, description = "Successfully created tenant", body = TenantDto),
        (status = 400, description = "Invalid tenant data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tenant(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TenantFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = TenantParams::from_dto(user.company_id, payload);
    let tenant = TenantService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(tenant.into_dto())))
}

/// Update an existing tenant.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    put,
    path = "/api/tenants/{id}",
    tag = TENANT_TAG,
    params(("id" = i32, Path, description = "Tenant ID")),
    request_body = TenantFormDto,
    responses(
        (status = 200, description = "Successfully updated tenant", body = TenantDto),
        (status = 400, description = "Invalid tenant data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Tenant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tenant(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<TenantFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = TenantParams::from_dto(user.company_id, payload);
    let tenant = TenantService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(tenant.into_dto())))
}

/// Delete a tenant that has no contracts.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    delete,
    path = "/api/tenants/{id}",
    tag = TENANT_TAG,
    params(("id" = i32, Path, description = "Tenant ID")),
    responses(
        (status = 204, description = "Successfully deleted tenant"),
        (status = 400, description = "Tenant still has contracts", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Tenant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tenant(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    TenantService::new(&state.db)
        .delete(user.company_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
