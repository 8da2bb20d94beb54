use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::issue::{IssueDto, IssueFilterDto, IssueFormDto, IssuePriority, IssueStatus},
    server::util::parse::parse_column,
};

/// A maintenance ticket on a property.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub id: i32,
    pub company_id: i32,
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

impl Issue {
    pub fn from_entity(entity: entity::issue::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            company_id: entity.company_id,
            property_id: entity.property_id,
            tenant_id: entity.tenant_id,
            provider_id: entity.provider_id,
            title: entity.title,
            description: entity.description,
            priority: parse_column(&entity.priority)?,
            status: parse_column(&entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            resolved_at: entity.resolved_at,
        })
    }

    pub fn into_dto(self) -> IssueDto {
        IssueDto {
            id: self.id,
            property_id: self.property_id,
            tenant_id: self.tenant_id,
            provider_id: self.provider_id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            resolved_at: self.resolved_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IssueParams {
    pub company_id: i32,
    pub property_id: i32,
    pub tenant_id: Option<i32>,
    pub provider_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub priority: IssuePriority,
}

impl IssueParams {
    pub fn from_dto(company_id: i32, dto: IssueFormDto) -> Self {
        Self {
            company_id,
            property_id: dto.property_id,
            tenant_id: dto.tenant_id,
            provider_id: dto.provider_id,
            title: dto.title.trim().to_string(),
            description: dto.description.trim().to_string(),
            priority: dto.priority,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueFilter {
    pub search: Option<String>,
    pub status: Option<IssueStatus>,
    pub priority: Option<IssuePriority>,
    pub property_id: Option<i32>,
    pub provider_id: Option<i32>,
}

impl IssueFilter {
    pub fn from_dto(search: Option<String>, dto: IssueFilterDto) -> Self {
        Self {
            search,
            status: dto.status,
            priority: dto.priority,
            property_id: dto.property_id,
            provider_id: dto.provider_id,
        }
    }
}
