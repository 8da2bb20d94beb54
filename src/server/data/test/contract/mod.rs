use crate::{
    model::contract::ContractStatus,
    server::{
        data::contract::ContractRepository,
        model::{
            contract::{ContractFilter, ContractParams},
            scope::{Scope, Visibility},
        },
    },
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod expire;
mod find_active_for_property;
mod get_paginated;
mod reminder_queries;
mod set_status;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
