use sea_orm::DatabaseConnection;

use crate::server::{
    data::company::CompanyRepository,
    error::AppError,
    model::company::{Company, UpdateCompanyParams},
};

pub struct CompanyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, company_id: i32) -> Result<Company, AppError> {
        CompanyRepository::new(self.db)
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company {} not found", company_id)))
    }

    /// Updates the company profile and management fee
    pub async fn update(&self, params: UpdateCompanyParams) -> Result<Company, AppError> {
        let id = params.id;

        CompanyRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company {} not found", id)))
    }
}
