use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::contract::ContractStatus,
    server::{
        data::{
            contract::ContractRepository, property::PropertyRepository, tenant::TenantRepository,
        },
        error::AppError,
        model::{
            contract::{Contract, ContractFilter, ContractParams},
            scope::Scope,
            Paginated,
        },
    },
};

pub struct ContractService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContractService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        scope: &Scope,
        filter: ContractFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Contract>, AppError> {
        let (contracts, total) = ContractRepository::new(self.db)
            .get_paginated(scope, filter, page, per_page)
            .await?;

        Ok(Paginated::new(contracts, total, page, per_page))
    }

    pub async fn get_by_id(&self, scope: &Scope, id: i32) -> Result<Contract, AppError> {
        ContractRepository::new(self.db)
            .find_by_id(scope, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a contract after checking its references and the one-active-contract rule
    pub async fn create(&self, params: ContractParams) -> Result<Contract, AppError> {
        self.check(&params, None).await?;

        Ok(ContractRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: ContractParams) -> Result<Contract, AppError> {
        self.check(&params, Some(id)).await?;

        ContractRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Terminates an active contract.
    ///
    /// The end date defaults to today and must not precede the start date.
    pub async fn terminate(
        &self,
        company_id: i32,
        id: i32,
        end_date: Option<NaiveDate>,
    ) -> Result<Contract, AppError> {
        let contract = self.get_by_id(&Scope::company(company_id), id).await?;

        if contract.status != ContractStatus::Active {
            return Err(AppError::BadRequest(format!(
                "Only active contracts can be terminated, contract {} is {}",
                id, contract.status
            )));
        }

        let end_date = end_date.unwrap_or_else(|| Utc::now().date_naive());
        if end_date < contract.start_date {
            return Err(AppError::BadRequest(
                "End date must not be before the start date".to_string(),
            ));
        }

        ContractRepository::new(self.db)
            .set_status(company_id, id, ContractStatus::Terminated, Some(end_date))
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        if !ContractRepository::new(self.db)
            .delete(company_id, id)
            .await?
        {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn check(&self, params: &ContractParams, exclude_id: Option<i32>) -> Result<(), AppError> {
        let scope = Scope::company(params.company_id);

        if PropertyRepository::new(self.db)
            .find_by_id(&scope, params.property_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Property {} does not exist",
                params.property_id
            )));
        }

        if TenantRepository::new(self.db)
            .find_by_id(params.company_id, params.tenant_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Tenant {} does not exist",
                params.tenant_id
            )));
        }

        if let Some(end) = params.end_date {
            if end < params.start_date {
                return Err(AppError::BadRequest(
                    "End date must not be before the start date".to_string(),
                ));
            }
        }

        if params.status == ContractStatus::Active {
            let existing = ContractRepository::new(self.db)
                .find_active_for_property(params.property_id, exclude_id)
                .await?;

            if let Some(existing) = existing {
                return Err(AppError::BadRequest(format!(
                    "Property {} already has an active contract ({})",
                    params.property_id, existing.id
                )));
            }
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Contract {} not found", id))
}
