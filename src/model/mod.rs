pub mod api;
pub mod auth;
pub mod company;
pub mod contract;
pub mod file;
pub mod health;
pub mod issue;
pub mod offer;
pub mod owner;
pub mod property;
pub mod provider;
pub mod report;
pub mod tenant;
pub mod user;
pub mod workflow;
