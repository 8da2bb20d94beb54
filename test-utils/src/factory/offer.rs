//! Offer factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test provider offers.
pub struct OfferFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    issue_id: Option<i32>,
    property_id: Option<i32>,
    provider_id: Option<i32>,
    title: String,
    amount_cents: i64,
    status: String,
    valid_until: Option<NaiveDate>,
    decided_at: Option<DateTime<Utc>>,
}

impl<'a> OfferFactory<'a> {
    /// Creates a new OfferFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Offer {id}"`
    /// - amount_cents: `25_000`
    /// - status: `"draft"`
    /// - no issue, property, provider, validity or decision
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        Self {
            db,
            company_id,
            issue_id: None,
            property_id: None,
            provider_id: None,
            title: format!("Offer {}", next_id()),
            amount_cents: 25_000,
            status: "draft".to_string(),
            valid_until: None,
            decided_at: None,
        }
    }

    pub fn issue_id(mut self, issue_id: Option<i32>) -> Self {
        self.issue_id = issue_id;
        self
    }

    pub fn property_id(mut self, property_id: Option<i32>) -> Self {
        self.property_id = property_id;
        self
    }

    pub fn provider_id(mut self, provider_id: Option<i32>) -> Self {
        self.provider_id = provider_id;
        self
    }

    pub fn amount_cents(mut self, cents: i64) -> Self {
        self.amount_cents = cents;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn valid_until(mut self, valid_until: Option<NaiveDate>) -> Self {
        self.valid_until = valid_until;
        self
    }

    pub fn decided_at(mut self, decided_at: Option<DateTime<Utc>>) -> Self {
        self.decided_at = decided_at;
        self
    }

    /// Builds and inserts the offer.
    pub async fn build(self) -> Result<entity::offer::Model, DbErr> {
        entity::offer::ActiveModel {
            company_id: ActiveValue::Set(self.company_id),
            issue_id: ActiveValue::Set(self.issue_id),
            property_id: ActiveValue::Set(self.property_id),
            provider_id: ActiveValue::Set(self.provider_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            amount_cents: ActiveValue::Set(self.amount_cents),
            status: ActiveValue::Set(self.status),
            valid_until: ActiveValue::Set(self.valid_until),
            created_at: ActiveValue::Set(Utc::now()),
            decided_at: ActiveValue::Set(self.decided_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft offer for a property with default values.
pub async fn create_offer(
    db: &DatabaseConnection,
    company_id: i32,
    property_id: i32,
) -> Result<entity::offer::Model, DbErr> {
    OfferFactory::new(db, company_id)
        .property_id(Some(property_id))
        .build()
        .await
}
