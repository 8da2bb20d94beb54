//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every query issued on behalf of a user is filtered by the caller's company; queries on
//! role-scoped entities additionally take a `Scope` restricting the visible rows.

pub mod company;
pub mod contract;
pub mod issue;
pub mod offer;
pub mod owner;
pub mod property;
pub mod provider;
pub mod rate_limit;
pub mod tenant;
pub mod uploaded_file;
pub mod user;
pub mod workflow_notification;

#[cfg(test)]
mod test;
