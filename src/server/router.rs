//! Axum route table and OpenAPI document.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        auth::{ChangePasswordDto, LoginDto, SetupDto},
        company::{CompanyDto, UpdateCompanyDto},
        contract::{ContractDto, ContractFormDto, ContractStatus, TerminateContractDto},
        file::{FileEntityType, UploadedFileDto},
        health::HealthDto,
        issue::{IssueDto, IssueFormDto, IssuePriority, IssueStatus, UpdateIssueStatusDto},
        offer::{OfferDto, OfferFormDto, OfferStatus},
        owner::{OwnerDto, OwnerFormDto},
        property::{PropertyDto, PropertyFormDto},
        provider::{ProviderDto, ProviderFormDto},
        report::{
            DashboardDto, FinancialReportDto, FinancialTotalsDto, OwnerFinancialsDto,
            PropertyFinancialsDto,
        },
        tenant::{TenantDto, TenantFormDto},
        user::{CreateUserDto, UpdateUserDto, UserDto, UserRole},
        workflow::{WorkflowRunDto, WorkflowStepDto},
    },
    server::{
        config::StorageBackend,
        controller::{
            auth, company, contract, cron, export, file, health, issue, offer, owner, property,
            provider, report, setup, tenant, user,
        },
        middleware::rate_limit::limit_api_requests,
        service::file::{storage::LOCAL_UPLOADS_PATH, MAX_UPLOAD_BYTES},
        state::AppState,
    },
};

/// Seconds after which one request is added back to the shared auth burst budget.
const AUTH_REPLENISH_SECONDS: u64 = 1;
/// Requests the unauthenticated auth routes accept in a burst, across all clients.
const AUTH_BURST_SIZE: u32 = 30;

/// Multipart overhead accepted on top of the largest upload.
const UPLOAD_BODY_SLACK: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        setup::setup,
        auth::login,
        auth::logout,
        auth::get_user,
        auth::change_password,
        company::get_company,
        company::update_company,
        user::get_users,
        user::create_user,
        user::update_user,
        user::delete_user,
        owner::get_owners,
        owner::get_owner_by_id,
        owner::create_owner,
        owner::update_owner,
        owner::delete_owner,
        tenant::get_tenants,
        tenant::get_tenant_by_id,
        tenant::create_tenant,
        tenant::update_tenant,
        tenant::delete_tenant,
        provider::get_providers,
        provider::get_provider_by_id,
        provider::create_provider,
        provider::update_provider,
        provider::delete_provider,
        property::get_properties,
        property::get_property_by_id,
        property::create_property,
        property::update_property,
        property::delete_property,
        contract::get_contracts,
        contract::get_contract_by_id,
        contract::create_contract,
        contract::update_contract,
        contract::delete_contract,
        contract::terminate_contract,
        contract::contract_pdf,
        issue::get_issues,
        issue::get_issue_by_id,
        issue::create_issue,
        issue::update_issue,
        issue::update_issue_status,
        issue::delete_issue,
        offer::get_offers,
        offer::get_offer_by_id,
        offer::create_offer,
        offer::update_offer,
        offer::delete_offer,
        offer::send_offer,
        offer::accept_offer,
        offer::reject_offer,
        offer::offer_pdf,
        file::upload_file,
        file::get_files,
        file::delete_file,
        export::export_entity,
        export::export_report,
        report::get_financial_report,
        report::get_dashboard,
        cron::run_workflows,
        health::health,
    ),
    components(
        schemas(
            ErrorDto,
            SetupDto,
            LoginDto,
            ChangePasswordDto,
            CompanyDto,
            UpdateCompanyDto,
            UserDto,
            UserRole,
            CreateUserDto,
            UpdateUserDto,
            OwnerDto,
            OwnerFormDto,
            TenantDto,
            TenantFormDto,
            ProviderDto,
            ProviderFormDto,
            PropertyDto,
            PropertyFormDto,
            ContractDto,
            ContractFormDto,
            ContractStatus,
            TerminateContractDto,
            IssueDto,
            IssueFormDto,
            IssuePriority,
            IssueStatus,
            UpdateIssueStatusDto,
            OfferDto,
            OfferFormDto,
            OfferStatus,
            FileEntityType,
            UploadedFileDto,
            FinancialReportDto,
            FinancialTotalsDto,
            PropertyFinancialsDto,
            OwnerFinancialsDto,
            DashboardDto,
            WorkflowRunDto,
            WorkflowStepDto,
            HealthDto,
        )
    ),
    tags(
        (name = "setup", description = "First-admin bootstrap"),
        (name = "auth", description = "Login, logout and password"),
        (name = "company", description = "Company settings"),
        (name = "user", description = "User accounts"),
        (name = "owner", description = "Property owners"),
        (name = "tenant", description = "Tenants"),
        (name = "provider", description = "Service providers"),
        (name = "property", description = "Properties"),
        (name = "contract", description = "Rental contracts"),
        (name = "issue", description = "Maintenance issues"),
        (name = "offer", description = "Provider offers"),
        (name = "file", description = "File attachments"),
        (name = "export", description = "Spreadsheet exports"),
        (name = "report", description = "Financial report and dashboard"),
        (name = "cron", description = "Scheduled workflows"),
        (name = "health", description = "Service health"),
    ),
    info(
        title = "RentDesk API",
        description = "Property rental management for letting agencies",
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Every `/api` route except the health check runs behind the `api` rate limiter.
/// Setup and login additionally share a global burst cap. Uploads are served
/// from disk under `/uploads` when the local storage backend is configured.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(auth_routes())
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/auth/password", put(auth::change_password))
        .route(
            "/api/company",
            get(company::get_company).put(company::update_company),
        )
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route(
            "/api/users/{id}",
            put(user::update_user).delete(user::delete_user),
        )
        .route("/api/owners", get(owner::get_owners).post(owner::create_owner))
        .route(
            "/api/owners/{id}",
            get(owner::get_owner_by_id)
                .put(owner::update_owner)
                .delete(owner::delete_owner),
        )
        .route(
            "/api/tenants",
            get(tenant::get_tenants).post(tenant::create_tenant),
        )
        .route(
            "/api/tenants/{id}",
            get(tenant::get_tenant_by_id)
                .put(tenant::update_tenant)
                .delete(tenant::delete_tenant),
        )
        .route(
            "/api/providers",
            get(provider::get_providers).post(provider::create_provider),
        )
        .route(
            "/api/providers/{id}",
            get(provider::get_provider_by_id)
                .put(provider::update_provider)
                .delete(provider::delete_provider),
        )
        .route(
            "/api/properties",
            get(property::get_properties).post(property::create_property),
        )
        .route(
            "/api/properties/{id}",
            get(property::get_property_by_id)
                .put(property::update_property)
                .delete(property::delete_property),
        )
        .route(
            "/api/contracts",
            get(contract::get_contracts).post(contract::create_contract),
        )
        .route(
            "/api/contracts/{id}",
            get(contract::get_contract_by_id)
                .put(contract::update_contract)
                .delete(contract::delete_contract),
        )
        .route(
            "/api/contracts/{id}/terminate",
            post(contract::terminate_contract),
        )
        .route("/api/contracts/{id}/pdf", get(contract::contract_pdf))
        .route("/api/issues", get(issue::get_issues).post(issue::create_issue))
        .route(
            "/api/issues/{id}",
            get(issue::get_issue_by_id)
                .put(issue::update_issue)
                .delete(issue::delete_issue),
        )
        .route("/api/issues/{id}/status", put(issue::update_issue_status))
        .route("/api/offers", get(offer::get_offers).post(offer::create_offer))
        .route(
            "/api/offers/{id}",
            get(offer::get_offer_by_id)
                .put(offer::update_offer)
                .delete(offer::delete_offer),
        )
        .route("/api/offers/{id}/send", post(offer::send_offer))
        .route("/api/offers/{id}/accept", post(offer::accept_offer))
        .route("/api/offers/{id}/reject", post(offer::reject_offer))
        .route("/api/offers/{id}/pdf", get(offer::offer_pdf))
        .route(
            "/api/files",
            post(file::upload_file)
                .get(file::get_files)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + UPLOAD_BODY_SLACK)),
        )
        .route("/api/files/{id}", axum::routing::delete(file::delete_file))
        .route("/api/export/report", get(export::export_report))
        .route("/api/export/{entity}", get(export::export_entity))
        .route("/api/reports/financial", get(report::get_financial_report))
        .route("/api/reports/dashboard", get(report::get_dashboard))
        .route("/api/cron/workflows", post(cron::run_workflows))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            limit_api_requests,
        ));

    let mut router = Router::new()
        .route("/api/health", get(health::health))
        .merge(api)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()));

    if matches!(state.config.storage_backend, StorageBackend::Local) {
        router = router.nest_service(
            LOCAL_UPLOADS_PATH,
            ServeDir::new(&state.config.upload_dir),
        );
    }

    router.with_state(state)
}

/// Unauthenticated routes creating sessions, behind a global burst cap.
fn auth_routes() -> Router<AppState> {
    let routes = Router::new()
        .route("/api/setup", post(setup::setup))
        .route("/api/auth/login", post(auth::login));

    let config = GovernorConfigBuilder::default()
        .key_extractor(GlobalKeyExtractor)
        .per_second(AUTH_REPLENISH_SECONDS)
        .burst_size(AUTH_BURST_SIZE)
        .finish();

    match config {
        Some(config) => routes.layer(GovernorLayer::new(Arc::new(config))),
        None => routes,
    }
}
