//! HTTP request handlers.
//!
//! One module per resource. Handlers check access through `AuthGuard`, convert
//! request DTOs into service params and map the returned domain models back to
//! DTOs. Every handler carries a `utoipa::path` annotation collected by
//! `router::ApiDoc`.

pub mod auth;
pub mod company;
pub mod contract;
pub mod cron;
pub mod export;
pub mod file;
pub mod health;
pub mod issue;
pub mod offer;
pub mod owner;
pub mod property;
pub mod provider;
pub mod report;
pub mod setup;
pub mod tenant;
pub mod user;
