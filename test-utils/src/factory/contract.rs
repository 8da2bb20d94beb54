//! Contract factory.

use chrono::{Months, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rental contracts.
///
/// Defaults to an active, open-ended contract that started a year ago.
pub struct ContractFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    property_id: i32,
    tenant_id: i32,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    monthly_rent_cents: i64,
    deposit_cents: i64,
    payment_day: i32,
    status: String,
}

impl<'a> ContractFactory<'a> {
    /// Creates a new ContractFactory with default values.
    ///
    /// Defaults:
    /// - start_date: one year before today
    /// - end_date: `None`
    /// - monthly_rent_cents: `100_000`
    /// - deposit_cents: `300_000`
    /// - payment_day: `1`
    /// - status: `"active"`
    pub fn new(
        db: &'a DatabaseConnection,
        company_id: i32,
        property_id: i32,
        tenant_id: i32,
    ) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            company_id,
            property_id,
            tenant_id,
            start_date: today.checked_sub_months(Months::new(12)).unwrap_or(today),
            end_date: None,
            monthly_rent_cents: 100_000,
            deposit_cents: 300_000,
            payment_day: 1,
            status: "active".to_string(),
        }
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn monthly_rent_cents(mut self, cents: i64) -> Self {
        self.monthly_rent_cents = cents;
        self
    }

    pub fn payment_day(mut self, day: i32) -> Self {
        self.payment_day = day;
        self
    }

    /// Sets the status string (`draft`, `active`, `terminated`, `expired`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the contract.
    pub async fn build(self) -> Result<entity::contract::Model, DbErr> {
        entity::contract::ActiveModel {
            company_id: ActiveValue::Set(self.company_id),
            property_id: ActiveValue::Set(self.property_id),
            tenant_id: ActiveValue::Set(self.tenant_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            monthly_rent_cents: ActiveValue::Set(self.monthly_rent_cents),
            deposit_cents: ActiveValue::Set(self.deposit_cents),
            payment_day: ActiveValue::Set(self.payment_day),
            status: ActiveValue::Set(self.status),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active contract with default values.
pub async fn create_contract(
    db: &DatabaseConnection,
    company_id: i32,
    property_id: i32,
    tenant_id: i32,
) -> Result<entity::contract::Model, DbErr> {
    ContractFactory::new(db, company_id, property_id, tenant_id)
        .build()
        .await
}
