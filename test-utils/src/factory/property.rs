//! Property factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test properties.
pub struct PropertyFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    owner_id: i32,
    name: String,
    city: String,
    property_type: String,
    monthly_rent_cents: i64,
}

impl<'a> PropertyFactory<'a> {
    /// Creates a new PropertyFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Property {id}"`
    /// - city: `"Berlin"`
    /// - property_type: `"apartment"`
    /// - monthly_rent_cents: `100_000`
    pub fn new(db: &'a DatabaseConnection, company_id: i32, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            company_id,
            owner_id,
            name: format!("Property {}", id),
            city: "Berlin".to_string(),
            property_type: "apartment".to_string(),
            monthly_rent_cents: 100_000,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = property_type.into();
        self
    }

    pub fn monthly_rent_cents(mut self, cents: i64) -> Self {
        self.monthly_rent_cents = cents;
        self
    }

    /// Builds and inserts the property.
    pub async fn build(self) -> Result<entity::property::Model, DbErr> {
        entity::property::ActiveModel {
            company_id: ActiveValue::Set(self.company_id),
            owner_id: ActiveValue::Set(self.owner_id),
            address: ActiveValue::Set(format!("{} Street 1", self.name)),
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            postal_code: ActiveValue::Set(None),
            property_type: ActiveValue::Set(self.property_type),
            monthly_rent_cents: ActiveValue::Set(self.monthly_rent_cents),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a property with default values.
pub async fn create_property(
    db: &DatabaseConnection,
    company_id: i32,
    owner_id: i32,
) -> Result<entity::property::Model, DbErr> {
    PropertyFactory::new(db, company_id, owner_id).build().await
}
