use crate::{
    client::{
        api::helper::{get, parse_response, send_request, with_query},
        model::error::ApiError,
    },
    model::report::{DashboardDto, FinancialReportDto},
};

pub async fn get_dashboard() -> Result<DashboardDto, ApiError> {
    let response = send_request(get("/api/reports/dashboard")).await?;
    parse_response(response).await
}

pub async fn get_financial_report(
    year: i32,
    month: Option<u32>,
) -> Result<FinancialReportDto, ApiError> {
    let url = with_query(
        "/api/reports/financial",
        &[
            ("year", Some(year.to_string())),
            ("month", month.map(|m| m.to_string())),
        ],
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

