//! Owner factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test owners.
pub struct OwnerFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    name: String,
    email: Option<String>,
}

impl<'a> OwnerFactory<'a> {
    /// Creates a new OwnerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Owner {id}"`
    /// - email: `"owner{id}@example.com"`
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            company_id,
            name: format!("Owner {}", id),
            email: Some(format!("owner{}@example.com", id)),
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

    /// Builds and inserts the owner.
    pub async fn build(self) -> Result<entity::owner::Model, DbErr> {
        entity::owner::ActiveModel {
            company_id: ActiveValue::Set(self.company_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            iban: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an owner with default values.
pub async fn create_owner(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::owner::Model, DbErr> {
    OwnerFactory::new(db, company_id).build().await
}
