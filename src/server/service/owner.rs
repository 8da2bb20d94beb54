use sea_orm::DatabaseConnection;

use crate::server::{
    data::{owner::OwnerRepository, property::PropertyRepository},
    error::AppError,
    model::{
        owner::{Owner, OwnerParams},
        Paginated,
    },
};

pub struct OwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        company_id: i32,
        search: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Owner>, AppError> {
        let (owners, total) = OwnerRepository::new(self.db)
            .get_paginated(company_id, search, page, per_page)
            .await?;

        Ok(Paginated::new(owners, total, page, per_page))
    }

    pub async fn get_by_id(&self, company_id: i32, id: i32) -> Result<Owner, AppError> {
        OwnerRepository::new(self.db)
            .find_by_id(company_id, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, params: OwnerParams) -> Result<Owner, AppError> {
        Ok(OwnerRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: OwnerParams) -> Result<Owner, AppError> {
        OwnerRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes an owner that no longer has any properties
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        let owner = self.get_by_id(company_id, id).await?;

        let properties = PropertyRepository::new(self.db)
            .count_by_owner(owner.id)
            .await?;
        if properties > 0 {
            return Err(AppError::BadRequest(format!(
                "Owner '{}' still has {} properties",
                owner.name, properties
            )));
        }

        OwnerRepository::new(self.db).delete(company_id, id).await?;

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Owner {} not found", id))
}
