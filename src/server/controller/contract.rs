use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, ListQuery, PaginatedDto},
        contract::{ContractDto, ContractFilterDto, ContractFormDto, TerminateContractDto},
    },
    server::{
        controller::export::attachment,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            contract::{ContractFilter, ContractParams},
            scope::Scope,
        },
        service::{contract::ContractService, export::ExportService},
        state::AppState,
    },
};

/// Tag for grouping contract endpoints in OpenAPI documentation
pub static CONTRACT_TAG: &str = "contract";

/// Get paginated rental contracts visible to the caller.
///
/// Owners see the contracts on their properties and tenants their own contracts.
///
/// # Access Control
/// - Any logged in user, rows limited by role
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `query` - Pagination parameters and optional search term
/// - `filter` - Optional status, property and tenant filters
///
/// # Returns
/// - `200 OK` - Paginated list of contracts
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/contracts",
    tag = CONTRACT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("search" = Option<String>, Query, description = "Property or tenant name contains"),
        ("status" = Option<String>, Query, description = "draft, active, terminated or expired"),
        ("property_id" = Option<i32>, Query, description = "Only contracts on this property"),
        ("tenant_id" = Option<i32>, Query, description = "Only contracts of this tenant")
    ),
    responses(
        (status = 200, description = "Successfully retrieved contracts", body = PaginatedDto<ContractDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contracts(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
    Query(filter): Query<ContractFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = ContractFilter::from_dto(query.search_term(), filter);
    let contracts = ContractService::new(&state.db)
        .get_paginated(&Scope::for_user(&user), filter, query.page, query.per_page())
        .await?;

    Ok((StatusCode::OK, Json(contracts.into_dto(|c| c.into_dto()))))
}

/// Get a single contract.
///
/// # Access Control
/// - Any logged in user who can see the contract
///
/// # Returns
/// - `200 OK` - The contract
/// - `404 Not Found` - Contract missing or not visible to the caller
#[utoipa::path(
    get,
    path = "/api/contracts/{id}",
    tag = CONTRACT_TAG,
    params(("id" = i32, Path, description = "Contract ID")),
    responses(
        (status = 200, description = "Successfully retrieved contract", body = ContractDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contract_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let contract = ContractService::new(&state.db)
        .get_by_id(&Scope::for_user(&user), id)
        .await?;

    Ok((StatusCode::OK, Json(contract.into_dto())))
}

/// Create a new contract.
///
/// Property and tenant must belong to the caller's company and a property can
/// only have one active contract at a time.
///
/// # Access Control
/// - `Staff` - Only admins and managers can create contracts
///
/// # Returns
/// - `201 Created` - Successfully created contract
/// - `400 Bad Request` - Invalid dates, unknown references or a second active contract
#[utoipa::path(
    post,
    path = "/api/contracts",
    tag = CONTRACT_TAG,
    request_body = ContractFormDto,
    responses(
        (status = 201, description = "Successfully created contract", body = ContractDto),
        (status = 400, description = "Invalid contract data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contract(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ContractFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = ContractParams::from_dto(user.company_id, payload);
    let contract = ContractService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(contract.into_dto())))
}

/// Update an existing contract.
///
/// # Access Control
/// - `Staff` - Only admins and managers can update contracts
///
/// # Returns
/// - `200 OK` - Successfully updated contract
/// - `400 Bad Request` - Invalid dates, unknown references or a second active contract
/// - `404 Not Found` - No such contract in the caller's company
#[utoipa::path(
    put,
    path = "/api/contracts/{id}",
    tag = CONTRACT_TAG,
    params(("id" = i32, Path, description = "Contract ID")),
    request_body = ContractFormDto,
    responses(
        (status = 200, description = "Successfully updated contract", body = ContractDto),
        (status = 400, description = "Invalid contract data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_contract(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ContractFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = ContractParams::from_dto(user.company_id, payload);
    let contract = ContractService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(contract.into_dto())))
}

/// Delete a contract.
///
/// # Access Control
/// - `Staff` - Only admins and managers can delete contracts
#[utoipa::path(
    delete,
    path = "/api/contracts/{id}",
    tag = CONTRACT_TAG,
    params(("id" = i32, Path, description = "Contract ID")),
    responses(
        (status = 204, description = "Successfully deleted contract"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_contract(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    ContractService::new(&state.db)
        .delete(user.company_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Terminate an active contract.
///
/// Sets the status to terminated and the end date to the given date, or today
/// when none is given.
///
/// # Access Control
/// - `Staff` - Only admins and managers can terminate contracts
///
/// # Arguments
/// - `id` - Contract ID
/// - `payload` - Optional end date
///
/// # Returns
/// - `200 OK` - The terminated contract
/// - `400 Bad Request` - Contract not active or end date before start date
/// - `404 Not Found` - No such contract in the caller's company
#[utoipa::path(
    post,
    path = "/api/contracts/{id}/terminate",
    tag = CONTRACT_TAG,
    params(("id" = i32, Path, description = "Contract ID")),
    request_body = TerminateContractDto,
    responses(
        (status = 200, description = "Contract terminated", body = ContractDto),
        (status = 400, description = "Contract cannot be terminated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn terminate_contract(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<TerminateContractDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let contract = ContractService::new(&state.db)
        .terminate(user.company_id, id, payload.end_date)
        .await?;

    Ok((StatusCode::OK, Json(contract.into_dto())))
}

/// Download a contract as a PDF document.
///
/// # Access Control
/// - `Staff` - Only admins and managers can export
#[utoipa::path(
    get,
    path = "/api/contracts/{id}/pdf",
    tag = CONTRACT_TAG,
    params(("id" = i32, Path, description = "Contract ID")),
    responses(
        (status = 200, description = "PDF document", content_type = "application/pdf"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn contract_pdf(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let export = ExportService::new(&state.db)
        .contract_pdf(user.company_id, id)
        .await?;

    Ok(attachment(export))
}
