use crate::server::{data::owner::OwnerRepository, model::owner::OwnerParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;

fn params(company_id: i32, name: &str) -> OwnerParams {
    OwnerParams {
        company_id,
        name: name.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        phone: None,
        address: None,
        iban: Some("DE89370400440532013000".to_string()),
        notes: None,
    }
}
