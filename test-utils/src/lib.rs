//! RentDesk Test Utils
//!
//! Shared testing utilities for the RentDesk server. The crate offers a builder for
//! in-memory SQLite test contexts and factories that insert CRM records with sensible
//! defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder selecting which entity tables to create
//! - **TestContext**: Test environment holding the database connection and a session
//! - **factory**: Builders inserting companies, users, owners, properties, contracts...
//! - **TestError**: Errors that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_owners() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let company = factory::create_company(db).await?;
//!     let owner = factory::create_owner(db, company.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
