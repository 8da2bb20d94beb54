use chrono::{NaiveTime, TimeZone, Utc};

use super::{as_user, date};
use crate::server::{
    error::AppError,
    model::scope::Scope,
    service::report::ReportService,
};
use test_utils::{builder::TestBuilder, factory};

mod dashboard;
mod financial;
