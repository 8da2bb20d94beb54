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
        property::{PropertyDto, PropertyFormDto},
    },
};

pub async fn get_properties(
    page: u64,
    entries: u64,
    search: String,
    owner_id: Option<i32>,
) -> Result<PaginatedDto<PropertyDto>, ApiError> {
    let mut params = list_params(page, entries, &search);
    params.push(("owner_id", owner_id.map(|id| id.to_string())));

    let url = with_query("/api/properties", &params);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_property(payload: PropertyFormDto) -> Result<PropertyDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/properties").body(body)).await?;
    parse_response(response).await
}

pub async fn update_property(id: i32, payload: PropertyFormDto) -> Result<PropertyDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/properties/{}", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_property(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/properties/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
