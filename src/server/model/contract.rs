use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::contract::{ContractDto, ContractFilterDto, ContractFormDto, ContractStatus},
    server::util::{parse::parse_column, text::non_blank},
};

/// A lease linking a tenant to a property.
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    pub id: i32,
    pub company_id: i32,
    pub property_id: i32,
    pub tenant_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub monthly_rent_cents: i64,
    pub deposit_cents: i64,
    pub payment_day: i32,
    pub status: ContractStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Contract {
    pub fn from_entity(entity: entity::contract::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            company_id: entity.company_id,
            property_id: entity.property_id,
            tenant_id: entity.tenant_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            monthly_rent_cents: entity.monthly_rent_cents,
            deposit_cents: entity.deposit_cents,
            payment_day: entity.payment_day,
            status: parse_column(&entity.status)?,
            notes: entity.notes,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ContractDto {
        ContractDto {
            id: self.id,
            property_id: self.property_id,
            tenant_id: self.tenant_id,
            start_date: self.start_date,
            end_date: self.end_date,
            monthly_rent_cents: self.monthly_rent_cents,
            deposit_cents: self.deposit_cents,
            payment_day: self.payment_day,
            status: self.status,
            notes: self.notes,
            created_at: self.created_at,
        }
    }

    /// Whether the contract covers any day between `from` and `to` inclusive.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.end_date.is_none_or(|end| end >= from)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContractParams {
    pub company_id: i32,
    pub property_id: i32,
    pub tenant_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub monthly_rent_cents: i64,
    pub deposit_cents: i64,
    pub payment_day: i32,
    pub status: ContractStatus,
    pub notes: Option<String>,
}

impl ContractParams {
    pub fn from_dto(company_id: i32, dto: ContractFormDto) -> Self {
        Self {
            company_id,
            property_id: dto.property_id,
            tenant_id: dto.tenant_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            monthly_rent_cents: dto.monthly_rent_cents,
            deposit_cents: dto.deposit_cents,
            payment_day: dto.payment_day,
            status: dto.status,
            notes: non_blank(dto.notes),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractFilter {
    pub search: Option<String>,
    pub status: Option<ContractStatus>,
    pub property_id: Option<i32>,
    pub tenant_id: Option<i32>,
}

impl ContractFilter {
    pub fn from_dto(search: Option<String>, dto: ContractFilterDto) -> Self {
        Self {
            search,
            status: dto.status,
            property_id: dto.property_id,
            tenant_id: dto.tenant_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contract(start: NaiveDate, end: Option<NaiveDate>) -> Contract {
        Contract {
            id: 1,
            company_id: 1,
            property_id: 1,
            tenant_id: 1,
            start_date: start,
            end_date: end,
            monthly_rent_cents: 100_000,
            deposit_cents: 0,
            payment_day: 1,
            status: ContractStatus::Active,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn overlap_is_inclusive() {
        let c = contract(date(2025, 3, 15), Some(date(2025, 5, 1)));

        assert!(c.overlaps(date(2025, 3, 1), date(2025, 3, 31)));
        assert!(c.overlaps(date(2025, 5, 1), date(2025, 5, 31)));
        assert!(!c.overlaps(date(2025, 2, 1), date(2025, 2, 28)));
        assert!(!c.overlaps(date(2025, 6, 1), date(2025, 6, 30)));
    }

    #[test]
    fn open_ended_contract_overlaps_future() {
        let c = contract(date(2020, 1, 1), None);

        assert!(c.overlaps(date(2030, 1, 1), date(2030, 1, 31)));
    }
}
