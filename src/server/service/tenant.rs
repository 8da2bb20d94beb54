use sea_orm::DatabaseConnection;

use crate::server::{
    data::{contract::ContractRepository, tenant::TenantRepository},
    error::AppError,
    model::{
        tenant::{Tenant, TenantParams},
        Paginated,
    },
};

pub struct TenantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TenantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        company_id: i32,
        search: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Tenant>, AppError> {
        let (tenants, total) = TenantRepository::new(self.db)
            .get_paginated(company_id, search, page, per_page)
            .await?;

        Ok(Paginated::new(tenants, total, page, per_page))
    }

    pub async fn get_by_id(&self, company_id: i32, id: i32) -> Result<Tenant, AppError> {
        TenantRepository::new(self.db)
            .find_by_id(company_id, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, params: TenantParams) -> Result<Tenant, AppError> {
        Ok(TenantRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: TenantParams) -> Result<Tenant, AppError> {
        TenantRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a tenant without contracts; tenants with lease history are kept
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        let tenant = self.get_by_id(company_id, id).await?;

        let contracts = ContractRepository::new(self.db)
            .count_by_tenant(tenant.id)
            .await?;
        if contracts > 0 {
            return Err(AppError::BadRequest(format!(
                "Tenant '{}' still has {} contracts",
                tenant.name, contracts
            )));
        }

        TenantRepository::new(self.db).delete(company_id, id).await?;

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Tenant {} not found", id))
}
