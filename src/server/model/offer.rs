use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::offer::{OfferDto, OfferFilterDto, OfferFormDto, OfferStatus},
    server::util::{parse::parse_column, text::non_blank},
};

/// A priced proposal for work on an issue or property.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub id: i32,
    pub company_id: i32,
    pub issue_id: Option<i32>,
    pub property_id: Option<i32>,
    pub provider_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub amount_cents: i64,
    pub status: OfferStatus,
    pub valid_until: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

impl Offer {
    pub fn from_entity(entity: entity::offer::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            company_id: entity.company_id,
            issue_id: entity.issue_id,
            property_id: entity.property_id,
            provider_id: entity.provider_id,
            title: entity.title,
            description: entity.description,
            amount_cents: entity.amount_cents,
            status: parse_column(&entity.status)?,
            valid_until: entity.valid_until,
            created_at: entity.created_at,
            decided_at: entity.decided_at,
        })
    }

    pub fn into_dto(self) -> OfferDto {
        OfferDto {
            id: self.id,
            issue_id: self.issue_id,
            property_id: self.property_id,
            provider_id: self.provider_id,
            title: self.title,
            description: self.description,
            amount_cents: self.amount_cents,
            status: self.status,
            valid_until: self.valid_until,
            created_at: self.created_at,
            decided_at: self.decided_at,
        }
    }
}

/// Offer field values. `property_id` is resolved from the issue by the service
/// before the params reach the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferParams {
    pub company_id: i32,
    pub issue_id: Option<i32>,
    pub property_id: Option<i32>,
    pub provider_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub amount_cents: i64,
    pub valid_until: Option<NaiveDate>,
}

impl OfferParams {
    pub fn from_dto(company_id: i32, dto: OfferFormDto) -> Self {
        Self {
            company_id,
            issue_id: dto.issue_id,
            property_id: dto.property_id,
            provider_id: dto.provider_id,
            title: dto.title.trim().to_string(),
            description: non_blank(dto.description),
            amount_cents: dto.amount_cents,
            valid_until: dto.valid_until,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferFilter {
    pub search: Option<String>,
    pub status: Option<OfferStatus>,
    pub issue_id: Option<i32>,
    pub property_id: Option<i32>,
}

impl OfferFilter {
    pub fn from_dto(search: Option<String>, dto: OfferFilterDto) -> Self {
        Self {
            search,
            status: dto.status,
            issue_id: dto.issue_id,
            property_id: dto.property_id,
        }
    }
}
