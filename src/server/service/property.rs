use sea_orm::DatabaseConnection;

use crate::server::{
    data::{contract::ContractRepository, owner::OwnerRepository, property::PropertyRepository},
    error::AppError,
    model::{
        property::{Property, PropertyFilter, PropertyParams},
        scope::Scope,
        Paginated,
    },
};

pub struct PropertyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of the properties visible under `scope`
    pub async fn get_paginated(
        &self,
        scope: &Scope,
        filter: PropertyFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Property>, AppError> {
        let (properties, total) = PropertyRepository::new(self.db)
            .get_paginated(scope, filter, page, per_page)
            .await?;

        Ok(Paginated::new(properties, total, page, per_page))
    }

    pub async fn get_by_id(&self, scope: &Scope, id: i32) -> Result<Property, AppError> {
        PropertyRepository::new(self.db)
            .find_by_id(scope, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, params: PropertyParams) -> Result<Property, AppError> {
        self.check_owner(&params).await?;

        Ok(PropertyRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: PropertyParams) -> Result<Property, AppError> {
        self.check_owner(&params).await?;

        PropertyRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a property without contracts, together with its issues
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        let property = self.get_by_id(&Scope::company(company_id), id).await?;

        let contracts = ContractRepository::new(self.db)
            .count_by_property(property.id)
            .await?;
        if contracts > 0 {
            return Err(AppError::BadRequest(format!(
                "Property '{}' still has {} contracts",
                property.name, contracts
            )));
        }

        PropertyRepository::new(self.db)
            .delete(company_id, id)
            .await?;

        Ok(())
    }

    async fn check_owner(&self, params: &PropertyParams) -> Result<(), AppError> {
        let owner = OwnerRepository::new(self.db)
            .find_by_id(params.company_id, params.owner_id)
            .await?;

        if owner.is_none() {
            return Err(AppError::BadRequest(format!(
                "Owner {} does not exist",
                params.owner_id
            )));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Property {} not found", id))
}
