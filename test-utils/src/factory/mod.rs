//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*`
//! shorthand that inserts a row with defaults. Factories take the ids of the rows
//! they reference (company, owner, property...) so tests stay explicit about the
//! tenancy they exercise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let company = factory::create_company(db).await?;
//! let owner = factory::create_owner(db, company.id).await?;
//! let property = factory::create_property(db, company.id, owner.id).await?;
//!
//! // Or everything a contract needs in one go
//! let (company, owner, tenant, property, contract) =
//!     factory::helpers::create_contract_with_dependencies(db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(db, company.id)
//!     .email("manager@example.com")
//!     .role("manager")
//!     .build()
//!     .await?;
//! ```

pub mod company;
pub mod contract;
pub mod helpers;
pub mod issue;
pub mod offer;
pub mod owner;
pub mod property;
pub mod provider;
pub mod tenant;
pub mod user;

pub use company::create_company;
pub use contract::create_contract;
pub use issue::create_issue;
pub use offer::create_offer;
pub use owner::create_owner;
pub use property::create_property;
pub use provider::create_provider;
pub use tenant::create_tenant;
pub use user::{create_admin, create_user};
