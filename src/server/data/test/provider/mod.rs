use crate::server::{data::provider::ProviderRepository, model::provider::ProviderParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_paginated;
