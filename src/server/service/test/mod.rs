use chrono::NaiveDate;

use crate::server::model::user::User;

mod auth;
mod contract;
mod export;
mod file;
mod issue;
mod offer;
mod property;
mod report;
mod setup;
mod user;
mod workflow;

/// Converts a factory-built user row into the domain model services take.
fn as_user(model: entity::user::Model) -> User {
    User::from_entity(model).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
