//! Maintenance issues.
//!
//! Staff manage issues freely. Tenants may report issues, but only on properties
//! where they hold an active contract, and the issue is always recorded as theirs.

use sea_orm::DatabaseConnection;

use crate::{
    model::{issue::IssueStatus, user::UserRole},
    server::{
        data::{
            contract::ContractRepository, issue::IssueRepository, property::PropertyRepository,
            provider::ProviderRepository, tenant::TenantRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            issue::{Issue, IssueFilter, IssueParams},
            scope::Scope,
            user::User,
            Paginated,
        },
    },
};

pub struct IssueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IssueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        scope: &Scope,
        filter: IssueFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Issue>, AppError> {
        let (issues, total) = IssueRepository::new(self.db)
            .get_paginated(scope, filter, page, per_page)
            .await?;

        Ok(Paginated::new(issues, total, page, per_page))
    }

    pub async fn get_by_id(&self, scope: &Scope, id: i32) -> Result<Issue, AppError> {
        IssueRepository::new(self.db)
            .find_by_id(scope, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates an issue on behalf of `actor`.
    ///
    /// # Arguments
    /// - `actor` - Staff or tenant user reporting the issue
    /// - `params` - Issue values; for tenants the tenant link is overwritten with
    ///   their own profile and any provider assignment is dropped
    ///
    /// # Returns
    /// - `Ok(Issue)` - The created issue with status `open`
    /// - `Err(AppError::BadRequest)` - A referenced record is not in the company
    /// - `Err(AppError::AuthErr(AccessDenied))` - Tenant without an active contract
    ///   on the property, or a role that cannot report issues
    pub async fn create(&self, actor: &User, mut params: IssueParams) -> Result<Issue, AppError> {
        params.company_id = actor.company_id;

        match actor.role {
            UserRole::Admin | UserRole::Manager => {}
            UserRole::Tenant => {
                let Some(tenant_id) = actor.tenant_id else {
                    return Err(AuthError::AccessDenied(
                        actor.id,
                        "tenant user without a tenant profile attempted to report an issue"
                            .to_string(),
                    )
                    .into());
                };

                let has_contract = ContractRepository::new(self.db)
                    .tenant_has_active_contract(tenant_id, params.property_id)
                    .await?;
                if !has_contract {
                    return Err(AuthError::AccessDenied(
                        actor.id,
                        format!(
                            "tenant {} has no active contract on property {}",
                            tenant_id, params.property_id
                        ),
                    )
                    .into());
                }

                params.tenant_id = Some(tenant_id);
                params.provider_id = None;
            }
            role => {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    format!("{} user attempted to report an issue", role),
                )
                .into())
            }
        }

        self.check_references(&params).await?;

        Ok(IssueRepository::new(self.db).create(params).await?)
    }

    /// Updates an issue, including (re)assigning its provider
    pub async fn update(&self, id: i32, params: IssueParams) -> Result<Issue, AppError> {
        self.check_references(&params).await?;

        IssueRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Moves an issue to `status`, stamping or clearing `resolved_at`
    pub async fn set_status(
        &self,
        company_id: i32,
        id: i32,
        status: IssueStatus,
    ) -> Result<Issue, AppError> {
        IssueRepository::new(self.db)
            .set_status(company_id, id, status)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        if !IssueRepository::new(self.db).delete(company_id, id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn check_references(&self, params: &IssueParams) -> Result<(), AppError> {
        let company_id = params.company_id;

        if PropertyRepository::new(self.db)
            .find_by_id(&Scope::company(company_id), params.property_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Property {} does not exist",
                params.property_id
            )));
        }

        if let Some(tenant_id) = params.tenant_id {
            if TenantRepository::new(self.db)
                .find_by_id(company_id, tenant_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Tenant {} does not exist",
                    tenant_id
                )));
            }
        }

        if let Some(provider_id) = params.provider_id {
            if ProviderRepository::new(self.db)
                .find_by_id(company_id, provider_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Provider {} does not exist",
                    provider_id
                )));
            }
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Issue {} not found", id))
}
