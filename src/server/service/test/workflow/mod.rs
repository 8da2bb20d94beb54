use chrono::{DateTime, NaiveTime, TimeDelta, TimeZone, Utc};

use super::date;
use crate::{
    model::{contract::ContractStatus, offer::OfferStatus},
    server::{
        data::{contract::ContractRepository, offer::OfferRepository, rate_limit::RateLimitRepository},
        error::AppError,
        model::{rate_limit::WindowState, scope::Scope, workflow::WorkflowStep},
        service::{email::EmailService, workflow::WorkflowService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod contracts;
mod issues;
mod maintenance;

/// 2025-05-10 08:00 UTC
fn now() -> DateTime<Utc> {
    Utc.from_utc_datetime(&date(2025, 5, 10).and_time(NaiveTime::from_hms_opt(8, 0, 0).unwrap()))
}

fn email() -> EmailService {
    EmailService::dry_run("no-reply@rentdesk.test")
}

fn retention() -> TimeDelta {
    TimeDelta::hours(1)
}
