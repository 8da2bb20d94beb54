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
        owner::{OwnerDto, OwnerFormDto},
    },
};

pub async fn get_owners(
    page: u64,
    entries: u64,
    search: String,
) -> Result<PaginatedDto<OwnerDto>, ApiError> {
    let url = with_query("/api/owners", &list_params(page, entries, &search));
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_owner(payload: OwnerFormDto) -> Result<OwnerDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/owners").body(body)).await?;
    parse_response(response).await
}

pub async fn update_owner(id: i32, payload: OwnerFormDto) -> Result<OwnerDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/owners/{}", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_owner(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/owners/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
