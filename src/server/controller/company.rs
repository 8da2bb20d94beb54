use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        company::{CompanyDto, UpdateCompanyDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::company::UpdateCompanyParams,
        service::company::CompanyService,
        state::AppState,
    },
};

/// Tag for grouping company endpoints in OpenAPI documentation
pub static COMPANY_TAG: &str = "company";

/// Get the admin's company profile.
///
/// # Access Control
/// - `Admin` - Only admins can view company settings
///
/// # Returns
/// - `200 OK` - The company
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    get,
    path = "/api/company",
    tag = COMPANY_TAG,
    responses(
        (status = 200, description = "Company profile", body = CompanyDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_company(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let company = CompanyService::new(&state.db).get(user.company_id).await?;

    Ok((StatusCode::OK, Json(company.into_dto())))
}

/// Update the company name, contact details and management fee.
///
/// # Access Control
/// - `Admin` - Only admins can change company settings
///
/// # Arguments
/// - `payload` - New name, email, phone, address and fee in basis points
///
/// # Returns
/// - `200 OK` - The updated company
/// - `400 Bad Request` - Invalid data, e.g. a fee above 10000 bps
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    put,
    path = "/api/company",
    tag = COMPANY_TAG,
    request_body = UpdateCompanyDto,
    responses(
        (status = 200, description = "Company updated", body = CompanyDto),
        (status = 400, description = "Invalid company data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_company(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateCompanyDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateCompanyParams::from_dto(user.company_id, payload);
    let company = CompanyService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(company.into_dto())))
}
