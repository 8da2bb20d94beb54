//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the data repositories. They enforce the
//! business rules of the CRM (company isolation, role restrictions, status
//! transitions), coordinate several repositories where an operation spans tables,
//! and talk to external systems such as object storage and the email API.
//!
//! Services work on domain models from `server::model`; controllers convert DTOs into
//! operation parameters before calling in and convert the returned models back.

pub mod auth;
pub mod company;
pub mod contract;
pub mod email;
pub mod export;
pub mod file;
pub mod issue;
pub mod offer;
pub mod owner;
pub mod property;
pub mod provider;
pub mod report;
pub mod setup;
pub mod tenant;
pub mod user;
pub mod workflow;

#[cfg(test)]
mod test;
