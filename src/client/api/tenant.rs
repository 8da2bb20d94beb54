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
        tenant::{TenantDto, TenantFormDto},
    },
};

pub async fn get_tenants(
    page: u64,
    entries: u64,
    search: String,
) -> Result<PaginatedDto<TenantDto>, ApiError> {
    let url = with_query("/api/tenants", &list_params(page, entries, &search));
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_tenant(payload: TenantFormDto) -> Result<TenantDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/tenants").body(body)).await?;
    parse_response(response).await
}

pub async fn update_tenant(id: i32, payload: TenantFormDto) -> Result<TenantDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/tenants/{}", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_tenant(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/tenants/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
