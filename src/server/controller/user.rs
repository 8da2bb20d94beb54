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
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::UpdateUserParams,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user management endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// GET /api/users - List the accounts of the admin's company
///
/// # Authentication
/// Requires `Admin`
///
/// # Query Parameters
/// - `page`, `entries`: pagination
/// - `search`: matched against name and email
///
/// # Returns
/// - `200 OK`: one page of users
/// - `403 Forbidden`: not an admin
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("search" = Option<String>, Query, description = "Name or email contains")
    ),
    responses(
        (status = 200, description = "Users of the company", body = PaginatedDto<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_paginated(
            admin.company_id,
            query.search_term(),
            query.page,
            query.per_page(),
        )
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto(|u| u.into_dto()))))
}

/// POST /api/users - Create an account, optionally linked to a profile
///
/// # Authentication
/// Requires `Admin`
///
/// # Returns
/// - `201 Created`: the new user
/// - `400 Bad Request`: invalid data, email taken or profile not in the company
/// - `403 Forbidden`: not an admin
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .create(admin.company_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// PUT /api/users/{id} - Update name, role, active flag and profile link
///
/// # Authentication
/// Requires `Admin`; admins cannot demote or disable themselves
///
/// # Returns
/// - `200 OK`: the updated user
/// - `400 Bad Request`: invalid data or self-demotion
/// - `404 Not Found`: no such user in the company
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateUserParams::from_dto(id, admin.company_id, payload);
    let user = UserService::new(&state.db).update(&admin, params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// DELETE /api/users/{id} - Delete an account other than your own
///
/// # Authentication
/// Requires `Admin`
///
/// # Returns
/// - `204 No Content`: deleted
/// - `400 Bad Request`: attempt to delete yourself
/// - `404 Not Found`: no such user in the company
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Cannot delete yourself", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(&admin, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
