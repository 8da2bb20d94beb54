use crate::server::{data::rate_limit::RateLimitRepository, model::rate_limit::WindowState};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod purge_before;
mod save;
