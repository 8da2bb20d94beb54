use crate::server::{
    error::AppError,
    middleware::rate_limit::RateLimiter,
    model::rate_limit::Decision,
};
use chrono::{Duration, Utc};
use test_utils::builder::TestBuilder;

mod check;
mod enforce;
