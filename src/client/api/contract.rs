use chrono::NaiveDate;

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
        contract::{ContractDto, ContractFormDto, ContractStatus, TerminateContractDto},
    },
};

pub async fn get_contracts(
    page: u64,
    entries: u64,
    search: String,
    status: Option<ContractStatus>,
) -> Result<PaginatedDto<ContractDto>, ApiError> {
    let mut params = list_params(page, entries, &search);
    params.push(("status", status.map(|s| s.as_str().to_string())));

    let url = with_query("/api/contracts", &params);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_contract(payload: ContractFormDto) -> Result<ContractDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/contracts").body(body)).await?;
    parse_response(response).await
}

pub async fn update_contract(id: i32, payload: ContractFormDto) -> Result<ContractDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/contracts/{}", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn terminate_contract(
    id: i32,
    end_date: Option<NaiveDate>,
) -> Result<ContractDto, ApiError> {
    let body = serialize_json(&TerminateContractDto { end_date })?;
    let url = format!("/api/contracts/{}/terminate", id);
    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_contract(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/contracts/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
