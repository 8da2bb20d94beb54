use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are created in the order they are added, so referenced tables must be
/// added before the tables pointing at them. Use the grouped helpers
/// (`with_user_tables`, `with_property_tables`, `with_crm_tables`) to get a
/// consistent order.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_property_tables()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed by `build()`, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the SeaORM entity using the SQLite
    /// backend, including the foreign keys declared on the entity's relations.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed to authenticate a user.
    ///
    /// Users reference their company and, optionally, the owner/tenant/provider
    /// profile they are linked to, so all of those tables are created:
    /// - Company
    /// - Owner
    /// - Tenant
    /// - Provider
    /// - User
    pub fn with_user_tables(self) -> Self {
        self.with_table(Company)
            .with_table(Owner)
            .with_table(Tenant)
            .with_table(Provider)
            .with_table(User)
    }

    /// Adds the user tables plus properties, contracts, issues and offers.
    pub fn with_property_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Property)
            .with_table(Contract)
            .with_table(Issue)
            .with_table(Offer)
    }

    /// Adds every table of the CRM schema.
    ///
    /// Equivalent to `with_property_tables()` followed by the uploaded file, rate
    /// limit and workflow notification tables.
    pub fn with_crm_tables(self) -> Self {
        self.with_property_tables()
            .with_table(UploadedFile)
            .with_table(RateLimitToken)
            .with_table(WorkflowNotification)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an in-memory database and all tables created
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
