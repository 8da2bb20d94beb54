use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        auth::{ChangePasswordDto, LoginDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, rate_limit::client_address, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// Attempts are counted by the `login` rate limiter per email and client address
/// before the credentials are checked. A successful login cycles the session id.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database and login limiter
/// - `session` - Session the user is logged into
/// - `headers` - Request headers, used for the client address
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - The logged in user
/// - `400 Bad Request` - Malformed email or empty password
/// - `401 Unauthorized` - Wrong email or password
/// - `403 Forbidden` - Account disabled
/// - `429 Too Many Requests` - Too many attempts
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Invalid login data", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "Account disabled", body = ErrorDto),
        (status = 429, description = "Too many login attempts", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let email = payload.email.trim().to_lowercase();
    let identity = format!("{}:{}", email, client_address(&headers));
    state.login_limiter.enforce(&state.db, &identity).await?;

    let user = AuthService::new(&state.db)
        .login(&email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out the current user.
///
/// Clears the session. Succeeds even when nobody is logged in.
///
/// # Access Control
/// - Public
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently logged in user.
///
/// # Access Control
/// - Any logged in, active user
///
/// # Returns
/// - `200 OK` - The current user
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Account disabled
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Account disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change the current user's password.
///
/// # Access Control
/// - Any logged in, active user
///
/// # Arguments
/// - `payload` - Current and new password
///
/// # Returns
/// - `204 No Content` - Password changed
/// - `400 Bad Request` - Current password wrong or new password too short
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    put,
    path = "/api/auth/password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Invalid password data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AuthService::new(&state.db)
        .change_password(user.id, &payload.current_password, &payload.new_password)
        .await?;

    tracing::info!("User {} changed their password", user.id);

    Ok(StatusCode::NO_CONTENT)
}
