//! Tenant factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tenants.
pub struct TenantFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    name: String,
    email: Option<String>,
}

impl<'a> TenantFactory<'a> {
    /// Creates a new TenantFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Tenant {id}"`
    /// - email: `"tenant{id}@example.com"`
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            company_id,
            name: format!("Tenant {}", id),
            email: Some(format!("tenant{}@example.com", id)),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Builds and inserts the tenant.
    pub async fn build(self) -> Result<entity::tenant::Model, DbErr> {
        entity::tenant::ActiveModel {
            company_id: ActiveValue::Set(self.company_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tenant with default values.
pub async fn create_tenant(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::tenant::Model, DbErr> {
    TenantFactory::new(db, company_id).build().await
}
