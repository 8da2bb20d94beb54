use super::as_user;
use crate::server::{
    error::AppError,
    model::{
        property::{PropertyFilter, PropertyParams},
        scope::Scope,
    },
    service::property::PropertyService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;

fn params(company_id: i32, owner_id: i32) -> PropertyParams {
    PropertyParams {
        company_id,
        owner_id,
        name: "Harbour View 3B".to_string(),
        address: "Harbour Street 3".to_string(),
        city: "Hamburg".to_string(),
        postal_code: Some("20457".to_string()),
        property_type: "apartment".to_string(),
        monthly_rent_cents: 145_000,
        notes: None,
    }
}
