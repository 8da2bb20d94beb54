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
        provider::{ProviderDto, ProviderFormDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::provider::ProviderParams,
        service::provider::ProviderService,
        state::AppState,
    },
};

/// Tag for grouping provider endpoints in OpenAPI documentation
pub static PROVIDER_TAG: &str = "provider";

/// Get paginated providers of the caller's company.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/providers",
    tag = PROVIDER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("search" = Option<String>, Query, description = "Name contains")
    ),
    responses(
        (status = 200, description = "Successfully retrieved providers", body = PaginatedDto<ProviderDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_providers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let providers = ProviderService::new(&state.db)
        .get_paginated(
            user.company_id,
            query.search_term(),
            query.page,
            query.per_page(),
        )
        .await?;

    Ok((StatusCode::OK, Json(providers.into_dto(|p| p.into_dto()))))
}

/// Get a single provider.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/providers/{id}",
    tag = PROVIDER_TAG,
    params(("id" = i32, Path, description = "Provider ID")),
    responses(
        (status = 200, description = "Successfully retrieved provider", body = ProviderDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_provider_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let provider = ProviderService::new(&state.db)
        .get_by_id(user.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(provider.into_dto())))
}

/// Create a new provider.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/providers",
    tag = PROVIDER_TAG,
    request_body = ProviderFormDto,
    responses(
        (status = 201, description = "Successfully created provider", body = ProviderDto),
        (status = 400, description = "Invalid provider data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_provider(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ProviderFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = ProviderParams::from_dto(user.company_id, payload);
    let provider = ProviderService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(provider.into_dto())))
}

/// Update an existing provider.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    put,
    path = "/api/providers/{id}",
    tag = PROVIDER_TAG,
    params(("id" = i32, Path, description = "Provider ID")),
    request_body = ProviderFormDto,
    responses(
        (status = 200, description = "Successfully updated provider", body = ProviderDto),
        (status = 400, description = "Invalid provider data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_provider(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ProviderFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = ProviderParams::from_dto(user.company_id, payload);
    let provider = ProviderService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(provider.into_dto())))
}

/// Delete a provider.
///
/// Issues and offers assigned to the provider are kept without it.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    delete,
    path = "/api/providers/{id}",
    tag = PROVIDER_TAG,
    params(("id" = i32, Path, description = "Provider ID")),
    responses(
        (status = 204, description = "Successfully deleted provider"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_provider(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    ProviderService::new(&state.db)
        .delete(user.company_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
