use crate::{
    model::offer::OfferStatus,
    server::{
        data::offer::OfferRepository,
        model::{
            offer::{OfferFilter, OfferParams},
            scope::{Scope, Visibility},
        },
    },
};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod expire_sent_before;
mod get_accepted_between;
mod get_paginated;
mod set_status;
