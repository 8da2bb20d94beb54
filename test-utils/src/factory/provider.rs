//! Provider factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test providers.
pub struct ProviderFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    name: String,
    email: Option<String>,
    service_type: Option<String>,
}

impl<'a> ProviderFactory<'a> {
    /// Creates a new ProviderFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Provider {id}"`
    /// - email: `"provider{id}@example.com"`
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            company_id,
            name: format!("Provider {}", id),
            email: Some(format!("provider{}@example.com", id)),
            service_type: Some("plumbing".to_string()),
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

    pub fn service_type(mut self, service_type: Option<String>) -> Self {
        self.service_type = service_type;
        self
    }

    /// Builds and inserts the provider.
    pub async fn build(self) -> Result<entity::provider::Model, DbErr> {
        entity::provider::ActiveModel {
            company_id: ActiveValue::Set(self.company_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            service_type: ActiveValue::Set(self.service_type),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a provider with default values.
pub async fn create_provider(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::provider::Model, DbErr> {
    ProviderFactory::new(db, company_id).build().await
}
