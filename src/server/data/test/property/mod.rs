use crate::server::{
    data::property::PropertyRepository,
    model::{
        property::{PropertyFilter, PropertyParams},
        scope::{Scope, Visibility},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_paginated;
