use crate::server::{data::tenant::TenantRepository, model::tenant::TenantParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;

fn params(company_id: i32, name: &str) -> TenantParams {
    TenantParams {
        company_id,
        name: name.to_string(),
        email: None,
        phone: Some("+49 40 5555".to_string()),
        notes: None,
    }
}
