use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::api::string_enum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum IssuePriority {
    Low,
    Medium,
    High,
    Urgent,
}

string_enum!(IssuePriority, "issue priority", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Urgent => "urgent",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

string_enum!(IssueStatus, "issue status", {
    Open => "open",
    InProgress => "in_progress",
    Resolved => "resolved",
    Closed => "closed",
});

impl IssueStatus {
    /// Resolved and closed issues carry a `resolved_at` timestamp.
    pub fn is_done(&self) -> bool {
        matches!(self, IssueStatus::Resolved | IssueStatus::Closed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct IssueDto {
    pub id: i32,
    pub property_id: i32,
    pub tenant_id: Option<i32>,
    pub provider_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub priority: IssuePriority,
    pub status: IssueStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct IssueFormDto {
    pub property_id: i32,
    pub tenant_id: Option<i32>,
    pub provider_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 10000))]
    pub description: String,
    pub priority: IssuePriority,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateIssueStatusDto {
    pub status: IssueStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueFilterDto {
    pub status: Option<IssueStatus>,
    pub priority: Option<IssuePriority>,
    pub property_id: Option<i32>,
    pub provider_id: Option<i32>,
}
