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
        provider::{ProviderDto, ProviderFormDto},
    },
};

pub async fn get_providers(
    page: u64,
    entries: u64,
    search: String,
) -> Result<PaginatedDto<ProviderDto>, ApiError> {
    let url = with_query("/api/providers", &list_params(page, entries, &search));
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_provider(payload: ProviderFormDto) -> Result<ProviderDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/providers").body(body)).await?;
    parse_response(response).await
}

pub async fn update_provider(id: i32, payload: ProviderFormDto) -> Result<ProviderDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/providers/{}", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_provider(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/providers/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
