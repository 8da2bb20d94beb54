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
        offer::{OfferDto, OfferFormDto, OfferStatus},
    },
};

pub async fn get_offers(
    page: u64,
    entries: u64,
    search: String,
    status: Option<OfferStatus>,
) -> Result<PaginatedDto<OfferDto>, ApiError> {
    let mut params = list_params(page, entries, &search);
    params.push(("status", status.map(|s| s.as_str().to_string())));

    let url = with_query("/api/offers", &params);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_offer(payload: OfferFormDto) -> Result<OfferDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/offers").body(body)).await?;
    parse_response(response).await
}

pub async fn update_offer(id: i32, payload: OfferFormDto) -> Result<OfferDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/offers/{}", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn send_offer(id: i32) -> Result<OfferDto, ApiError> {
    offer_transition(id, "send").await
}

pub async fn accept_offer(id: i32) -> Result<OfferDto, ApiError> {
    offer_transition(id, "accept").await
}

pub async fn reject_offer(id: i32) -> Result<OfferDto, ApiError> {
    offer_transition(id, "reject").await
}

async fn offer_transition(id: i32, action: &str) -> Result<OfferDto, ApiError> {
    let url = format!("/api/offers/{}/{}", id, action);
    let response = send_request(post(&url)).await?;
    parse_response(response).await
}

pub async fn delete_offer(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/offers/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
