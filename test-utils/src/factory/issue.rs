//! Issue factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test maintenance issues.
pub struct IssueFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    property_id: i32,
    tenant_id: Option<i32>,
    provider_id: Option<i32>,
    title: String,
    priority: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> IssueFactory<'a> {
    /// Creates a new IssueFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Issue {id}"`
    /// - priority: `"medium"`
    /// - status: `"open"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, company_id: i32, property_id: i32) -> Self {
        Self {
            db,
            company_id,
            property_id,
            tenant_id: None,
            provider_id: None,
            title: format!("Issue {}", next_id()),
            priority: "medium".to_string(),
            status: "open".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn tenant_id(mut self, tenant_id: Option<i32>) -> Self {
        self.tenant_id = tenant_id;
        self
    }

    pub fn provider_id(mut self, provider_id: Option<i32>) -> Self {
        self.provider_id = provider_id;
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets both `created_at` and `updated_at`, used to simulate stale issues.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the issue.
    pub async fn build(self) -> Result<entity::issue::Model, DbErr> {
        entity::issue::ActiveModel {
            company_id: ActiveValue::Set(self.company_id),
            property_id: ActiveValue::Set(self.property_id),
            tenant_id: ActiveValue::Set(self.tenant_id),
            provider_id: ActiveValue::Set(self.provider_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("Something needs fixing".to_string()),
            priority: ActiveValue::Set(self.priority),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            resolved_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open issue with default values.
pub async fn create_issue(
    db: &DatabaseConnection,
    company_id: i32,
    property_id: i32,
) -> Result<entity::issue::Model, DbErr> {
    IssueFactory::new(db, company_id, property_id).build().await
}
