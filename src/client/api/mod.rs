//! HTTP calls to the `/api` routes, only compiled for the browser.

#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod company;

#[cfg(feature = "web")]
pub mod contract;

#[cfg(feature = "web")]
pub mod file;

#[cfg(feature = "web")]
pub mod issue;

#[cfg(feature = "web")]
pub mod offer;

#[cfg(feature = "web")]
pub mod owner;

#[cfg(feature = "web")]
pub mod property;

#[cfg(feature = "web")]
pub mod provider;

#[cfg(feature = "web")]
pub mod report;

#[cfg(feature = "web")]
pub mod tenant;

#[cfg(feature = "web")]
pub mod user;
