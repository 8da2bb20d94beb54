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
        owner::{OwnerDto, OwnerFormDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::owner::OwnerParams,
        service::owner::OwnerService,
        state::AppState,
    },
};

/// Tag for grouping owner endpoints in OpenAPI documentation
pub static OWNER_TAG: &str = "owner";

/// Get paginated property owners.
///
/// Returns one page of the owners of the caller's company, sorted by name.
///
/// # Access Control
/// - `Staff` - Only admins and managers can list owners
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `query` - Pagination parameters and optional search term
///
/// # Returns
/// - `200 OK` - Paginated list of owners
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not staff
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/owners",
    tag = OWNER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("search" = Option<String>, Query, description = "Name contains")
    ),
    responses(
        (status = 200, description = "Successfully retrieved owners", body = PaginatedDto<OwnerDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owners(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let owners = OwnerService::new(&state.db)
        .get_paginated(
            user.company_id,
            query.search_term(),
            query.page,
            query.per_page(),
        )
        .await?;

    Ok((StatusCode::OK, Json(owners.into_dto(|o| o.into_dto()))))
}

/// Get a single owner.
///
/// # Access Control
/// - `Staff` - Only admins and managers can view owners
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Owner ID
///
/// # Returns
/// - `200 OK` - The owner
/// - `404 Not Found` - No such owner in the caller's company
#[utoipa::path(
    get,
    path = "/api/owners/{id}",
    tag = OWNER_TAG,
    params(("id" = i32, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Successfully retrieved owner", body = OwnerDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let owner = OwnerService::new(&state.db)
        .get_by_id(user.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(owner.into_dto())))
}

/// Create a new owner.
///
/// # Access Control
/// - `Staff` - Only admins and managers can create owners
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Owner name, contact details, IBAN and notes
///
/// # Returns
/// - `201 Created` - Successfully created owner
/// - `400 Bad Request` - Invalid owner data
#[utoipa::path(
    post,
    path = "/api/owners",
    tag = OWNER_TAG,
    request_body = OwnerFormDto,
    responses(
        (status = 201, description = "Successfully created owner", body = OwnerDto),
        (status = 400, description = "Invalid owner data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_owner(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<OwnerFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = OwnerParams::from_dto(user.company_id, payload);
    let owner = OwnerService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(owner.into_dto())))
}

/// Update an existing owner.
///
/// # Access Control
/// - `Staff` - Only admins and managers can update owners
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Owner ID
/// - `payload` - Replacement owner data
///
/// # Returns
/// - `200 OK` - Successfully updated owner
/// - `400 Bad Request` - Invalid owner data
/// - `404 Not Found` - No such owner in the caller's company
#[utoipa::path(
    put,
    path = "/api/owners/{id}",
    tag = OWNER_TAG,
    params(("id" = i32, Path, description = "Owner ID")),
    request_body = OwnerFormDto,
    responses(
        (status = 200, description = "Successfully updated owner", body = OwnerDto),
        (status = 400, description = "Invalid owner data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_owner(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<OwnerFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = OwnerParams::from_dto(user.company_id, payload);
    let owner = OwnerService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(owner.into_dto())))
}

/// Delete an owner.
///
/// Owners that still have properties cannot be deleted.
///
/// # Access Control
/// - `Staff` - Only admins and managers can delete owners
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Owner ID
///
/// # Returns
/// - `204 No Content` - Successfully deleted owner
/// - `400 Bad Request` - Owner still has properties
/// - `404 Not Found` - No such owner in the caller's company
#[utoipa::path(
    delete,
    path = "/api/owners/{id}",
    tag = OWNER_TAG,
    params(("id" = i32, Path, description = "Owner ID")),
    responses(
        (status = 204, description = "Successfully deleted owner"),
        (status = 400, description = "Owner still has properties", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_owner(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    OwnerService::new(&state.db)
        .delete(user.company_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
