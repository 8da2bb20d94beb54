use crate::{
    client::{
        api::helper::{get, parse_response, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::company::{CompanyDto, UpdateCompanyDto},
};

pub async fn get_company() -> Result<CompanyDto, ApiError> {
    let response = send_request(get("/api/company")).await?;
    parse_response(response).await
}

pub async fn update_company(payload: UpdateCompanyDto) -> Result<CompanyDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(put("/api/company").body(body)).await?;
    parse_response(response).await
}
