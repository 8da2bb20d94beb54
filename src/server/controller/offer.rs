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
        offer::{OfferDto, OfferFilterDto, OfferFormDto},
    },
    server::{
        controller::export::attachment,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            offer::{OfferFilter, OfferParams},
            scope::Scope,
        },
        service::{export::ExportService, offer::OfferService},
        state::AppState,
    },
};

/// Tag for grouping provider offer endpoints in OpenAPI documentation
pub static OFFER_TAG: &str = "offer";

/// Get paginated offers visible to the caller.
///
/// # Access Control
/// - Any logged in user, rows limited by role
#[utoipa::path(
    get,
    path = "/api/offers",
    tag = OFFER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("search" = Option<String>, Query, description = "Title contains"),
        ("status" = Option<String>, Query, description = "draft, sent, accepted, rejected or expired"),
        ("issue_id" = Option<i32>, Query, description = "Only offers for this issue"),
        ("property_id" = Option<i32>, Query, description = "Only offers for this property")
    ),
    responses(
        (status = 200, description = "Successfully retrieved offers", body = PaginatedDto<OfferDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_offers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
    Query(filter): Query<OfferFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = OfferFilter::from_dto(query.search_term(), filter);
    let offers = OfferService::new(&state.db)
        .get_paginated(&Scope::for_user(&user), filter, query.page, query.per_page())
        .await?;

    Ok((StatusCode::OK, Json(offers.into_dto(|o| o.into_dto()))))
}

/// Get a single offer.
///
/// # Access Control
/// - Any logged in user who can see the offer
#[utoipa::path(
    get,
    path = "/api/offers/{id}",
    tag = OFFER_TAG,
    params(("id" = i32, Path, description = "Offer ID")),
    responses(
        (status = 200, description = "Successfully retrieved offer", body = OfferDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_offer_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let offer = OfferService::new(&state.db)
        .get_by_id(&Scope::for_user(&user), id)
        .await?;

    Ok((StatusCode::OK, Json(offer.into_dto())))
}

/// Create a quote for an issue or a property.
///
/// Providers can only quote issues assigned to them; the offer is always linked
/// to their own provider profile. When an issue is given, its property is used.
///
/// # Access Control
/// - `Staff` or a provider assigned to the issue
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Issue or property, provider, title, amount and validity
///
/// # Returns
/// - `201 Created` - The new draft offer
/// - `400 Bad Request` - Missing target or references outside the company
/// - `403 Forbidden` - Provider not assigned to the issue, or another role
#[utoipa::path(
    post,
    path = "/api/offers",
    tag = OFFER_TAG,
    request_body = OfferFormDto,
    responses(
        (status = 201, description = "Successfully created offer", body = OfferDto),
        (status = 400, description = "Invalid offer data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to quote this issue", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_offer(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<OfferFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = OfferParams::from_dto(user.company_id, payload);
    let offer = OfferService::new(&state.db).create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(offer.into_dto())))
}

/// Update an offer that is still a draft or sent.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    put,
    path = "/api/offers/{id}",
    tag = OFFER_TAG,
    params(("id" = i32, Path, description = "Offer ID")),
    request_body = OfferFormDto,
    responses(
        (status = 200, description = "Successfully updated offer", body = OfferDto),
        (status = 400, description = "Invalid data or offer already decided", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_offer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<OfferFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = OfferParams::from_dto(user.company_id, payload);
    let offer = OfferService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(offer.into_dto())))
}

/// Delete an offer.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    delete,
    path = "/api/offers/{id}",
    tag = OFFER_TAG,
    params(("id" = i32, Path, description = "Offer ID")),
    responses(
        (status = 204, description = "Successfully deleted offer"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_offer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    OfferService::new(&state.db)
        .delete(user.company_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Mark a draft offer as sent.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/offers/{id}/send",
    tag = OFFER_TAG,
    params(("id" = i32, Path, description = "Offer ID")),
    responses(
        (status = 200, description = "Offer sent", body = OfferDto),
        (status = 400, description = "Offer is not a draft", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_offer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let offer = OfferService::new(&state.db)
        .send(user.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(offer.into_dto())))
}

/// Accept a pending offer.
///
/// Accepted offers count as expenses in the financial report from their
/// decision date on.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/offers/{id}/accept",
    tag = OFFER_TAG,
    params(("id" = i32, Path, description = "Offer ID")),
    responses(
        (status = 200, description = "Offer accepted", body = OfferDto),
        (status = 400, description = "Offer already decided", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_offer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let offer = OfferService::new(&state.db)
        .accept(user.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(offer.into_dto())))
}

/// Reject a pending offer.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/offers/{id}/reject",
    tag = OFFER_TAG,
    params(("id" = i32, Path, description = "Offer ID")),
    responses(
        (status = 200, description = "Offer rejected", body = OfferDto),
        (status = 400, description = "Offer already decided", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_offer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let offer = OfferService::new(&state.db)
        .reject(user.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(offer.into_dto())))
}

/// Download an offer as a PDF document.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/offers/{id}/pdf",
    tag = OFFER_TAG,
    params(("id" = i32, Path, description = "Offer ID")),
    responses(
        (status = 200, description = "PDF document", content_type = "application/pdf"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn offer_pdf(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let export = ExportService::new(&state.db)
        .offer_pdf(user.company_id, id)
        .await?;

    Ok(attachment(export))
}
