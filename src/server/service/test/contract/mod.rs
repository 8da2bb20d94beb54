use super::date;
use crate::{
    model::contract::ContractStatus,
    server::{
        error::AppError,
        model::{contract::ContractParams, scope::Scope},
        service::contract::ContractService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod terminate;

fn params(company_id: i32, property_id: i32, tenant_id: i32) -> ContractParams {
    ContractParams {
        company_id,
        property_id,
        tenant_id,
        start_date: date(2025, 1, 1),
        end_date: None,
        monthly_rent_cents: 120_000,
        deposit_cents: 240_000,
        payment_day: 3,
        status: ContractStatus::Active,
        notes: None,
    }
}
