//! Company factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test companies.
pub struct CompanyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    email: String,
    management_fee_bps: i32,
}

impl<'a> CompanyFactory<'a> {
    /// Creates a new CompanyFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Company {id}"`
    /// - slug: `"company-{id}"`
    /// - email: `"office{id}@example.com"`
    /// - management_fee_bps: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Company {}", id),
            slug: format!("company-{}", id),
            email: format!("office{}@example.com", id),
            management_fee_bps: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the management fee in basis points (1000 = 10%).
    pub fn management_fee_bps(mut self, bps: i32) -> Self {
        self.management_fee_bps = bps;
        self
    }

    /// Builds and inserts the company.
    pub async fn build(self) -> Result<entity::company::Model, DbErr> {
        entity::company::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            management_fee_bps: ActiveValue::Set(self.management_fee_bps),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a company with default values.
pub async fn create_company(db: &DatabaseConnection) -> Result<entity::company::Model, DbErr> {
    CompanyFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_companies_with_unique_slugs() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Company)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_company(db).await?;
        let second = create_company(db).await?;

        assert_ne!(first.slug, second.slug);
        assert_eq!(first.management_fee_bps, 0);

        Ok(())
    }
}
