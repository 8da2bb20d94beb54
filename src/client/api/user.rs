use crate::{
    client::{
        api::helper::{
            delete, get, list_params, parse_empty_response, parse_response, post, put,
            send_request, serialize_json, with_query,
        },
        model::error::ApiError,
    },
    model::{
        api::PaginatedDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
};

pub async fn get_users(
    page: u64,
    entries: u64,
    search: String,
) -> Result<PaginatedDto<UserDto>, ApiError> {
    let url = with_query("/api/users", &list_params(page, entries, &search));
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_user(payload: CreateUserDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/users").body(body)).await?;
    parse_response(response).await
}

pub async fn update_user(id: i32, payload: UpdateUserDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/users/{}", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_user(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/users/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
