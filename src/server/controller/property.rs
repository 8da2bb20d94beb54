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
        property::{PropertyDto, PropertyFilterDto, PropertyFormDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            property::{PropertyFilter, PropertyParams},
            scope::Scope,
        },
        service::property::PropertyService,
        state::AppState,
    },
};

/// Tag for grouping property endpoints in OpenAPI documentation
pub static PROPERTY_TAG: &str = "property";

/// Get paginated properties visible to the caller.
///
/// Staff see every property of the company, owners only their own, tenants the
/// properties they rent and providers the ones with issues assigned to them.
///
/// # Access Control
/// - Any logged in user, rows limited by role
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `query` - Pagination parameters and optional search term
/// - `filter` - Optional owner and city filters
///
/// # Returns
/// - `200 OK` - Paginated list of properties
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = PROPERTY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("search" = Option<String>, Query, description = "Name or address contains"),
        ("owner_id" = Option<i32>, Query, description = "Only properties of this owner"),
        ("city" = Option<String>, Query, description = "Only properties in this city")
    ),
    responses(
        (status = 200, description = "Successfully retrieved properties", body = PaginatedDto<PropertyDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_properties(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
    Query(filter): Query<PropertyFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = PropertyFilter::from_dto(query.search_term(), filter);
    let properties = PropertyService::new(&state.db)
        .get_paginated(&Scope::for_user(&user), filter, query.page, query.per_page())
        .await?;

    Ok((StatusCode::OK, Json(properties.into_dto(|p| p.into_dto()))))
}

/// Get a single property.
///
/// # Access Control
/// - Any logged in user who can see the property
///
/// # Returns
/// - `200 OK` - The property
/// - `404 Not Found` - Property missing or not visible to the caller
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Successfully retrieved property", body = PropertyDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_property_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let property = PropertyService::new(&state.db)
        .get_by_id(&Scope::for_user(&user), id)
        .await?;

    Ok((StatusCode::OK, Json(property.into_dto())))
}

/// Create a new property.
///
/// The owner must belong to the caller's company.
///
/// # Access Control
/// - `Staff` - Only admins and managers can create properties
///
/// # Returns
/// - `201 Created` - Successfully created property
/// - `400 Bad Request` - Invalid data or unknown owner
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = PROPERTY_TAG,
    request_body = PropertyFormDto,
    responses(
        (status = 201, description = "Successfully created property", body = PropertyDto),
        (status = 400, description = "Invalid property data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_property(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PropertyFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = PropertyParams::from_dto(user.company_id, payload);
    let property = PropertyService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(property.into_dto())))
}

/// Update an existing property.
///
/// # Access Control
/// - `Staff` - Only admins and managers can update properties
///
/// # Returns
/// - `200 OK` - Successfully updated property
/// - `400 Bad Request` - Invalid data or unknown owner
/// - `404 Not Found` - No such property in the caller's company
#[utoipa::path(
    put,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property ID")),
    request_body = PropertyFormDto,
    responses(
        (status = 200, description = "Successfully updated property", body = PropertyDto),
        (status = 400, description = "Invalid property data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_property(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<PropertyFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = PropertyParams::from_dto(user.company_id, payload);
    let property = PropertyService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(property.into_dto())))
}

/// Delete a property without contracts.
///
/// # Access Control
/// - `Staff` - Only admins and managers can delete properties
///
/// # Returns
/// - `204 No Content` - Successfully deleted property
/// - `400 Bad Request` - Property still has contracts
/// - `404 Not Found` - No such property in the caller's company
#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property ID")),
    responses(
        (status = 204, description = "Successfully deleted property"),
        (status = 400, description = "Property still has contracts", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_property(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    PropertyService::new(&state.db)
        .delete(user.company_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
