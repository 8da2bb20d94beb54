use crate::{
    model::issue::{IssuePriority, IssueStatus},
    server::{
        data::issue::IssueRepository,
        model::{
            issue::{IssueFilter, IssueParams},
            scope::{Scope, Visibility},
        },
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_open_created_before;
mod get_paginated;
mod set_status;
