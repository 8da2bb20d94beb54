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
        issue::{IssueDto, IssueFormDto, IssuePriority, IssueStatus, UpdateIssueStatusDto},
    },
};

pub async fn get_issues(
    page: u64,
    entries: u64,
    search: String,
    status: Option<IssueStatus>,
    priority: Option<IssuePriority>,
) -> Result<PaginatedDto<IssueDto>, ApiError> {
    let mut params = list_params(page, entries, &search);
    params.push(("status", status.map(|s| s.as_str().to_string())));
    params.push(("priority", priority.map(|p| p.as_str().to_string())));

    let url = with_query("/api/issues", &params);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_issue(payload: IssueFormDto) -> Result<IssueDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/issues").body(body)).await?;
    parse_response(response).await
}

pub async fn update_issue(id: i32, payload: IssueFormDto) -> Result<IssueDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/issues/{}", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn update_issue_status(id: i32, status: IssueStatus) -> Result<IssueDto, ApiError> {
    let body = serialize_json(&UpdateIssueStatusDto { status })?;
    let url = format!("/api/issues/{}/status", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_issue(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/issues/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
