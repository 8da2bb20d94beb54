use crate::{
    client::{
        api::helper::{
            get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        auth::{ChangePasswordDto, LoginDto, SetupDto},
        user::UserDto,
    },
};

/// Current user, `None` when there is no session.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;

    if response.status() == 401 {
        return Ok(None);
    }

    parse_response(response).await.map(Some)
}

pub async fn login(payload: LoginDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/auth/login").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn logout() -> Result<(), ApiError> {
    let response = send_request(post("/api/auth/logout")).await?;
    parse_empty_response(response).await
}

pub async fn setup(payload: SetupDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/setup").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn change_password(payload: ChangePasswordDto) -> Result<(), ApiError> {
    let body = serialize_json(&payload)?;
    let request = put("/api/auth/password").body(body);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
