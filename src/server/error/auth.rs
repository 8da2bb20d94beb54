use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email and password did not match a user.
    ///
    /// Results in a 401 Unauthorized response. The message does not reveal
    /// whether the email exists.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The user lacks the permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response; the reason is only logged.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// The account was deactivated by an administrator.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} is disabled")]
    AccountDisabled(i32),

    /// The first-admin setup code is wrong, expired or already used.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Invalid or expired setup code")]
    InvalidSetupCode,

    /// The cron trigger was called with a wrong `X-Cron-Secret` header.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Invalid cron secret")]
    InvalidCronSecret,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` / `AccountDisabled` / `InvalidSetupCode` / `InvalidCronSecret` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to perform this action",
            ),
            Self::AccountDisabled(_) => (StatusCode::FORBIDDEN, "This account has been disabled"),
            Self::InvalidSetupCode => (StatusCode::FORBIDDEN, "Invalid or expired setup code"),
            Self::InvalidCronSecret => (StatusCode::FORBIDDEN, "Invalid cron secret"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
