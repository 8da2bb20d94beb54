use sea_orm::DatabaseConnection;

use crate::server::{
    data::provider::ProviderRepository,
    error::AppError,
    model::{
        provider::{Provider, ProviderParams},
        Paginated,
    },
};

pub struct ProviderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProviderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        company_id: i32,
        search: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Provider>, AppError> {
        let (providers, total) = ProviderRepository::new(self.db)
            .get_paginated(company_id, search, page, per_page)
            .await?;

        Ok(Paginated::new(providers, total, page, per_page))
    }

    pub async fn get_by_id(&self, company_id: i32, id: i32) -> Result<Provider, AppError> {
        ProviderRepository::new(self.db)
            .find_by_id(company_id, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, params: ProviderParams) -> Result<Provider, AppError> {
        Ok(ProviderRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: ProviderParams) -> Result<Provider, AppError> {
        ProviderRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a provider; assigned issues and offers keep existing without it
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        if !ProviderRepository::new(self.db).delete(company_id, id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Provider {} not found", id))
}
