use crate::server::{
    data::company::CompanyRepository,
    model::company::{CreateCompanyParams, UpdateCompanyParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
