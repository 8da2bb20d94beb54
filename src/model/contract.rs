use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::model::api::string_enum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Draft,
    Active,
    Terminated,
    Expired,
}

string_enum!(ContractStatus, "contract status", {
    Draft => "draft",
    Active => "active",
    Terminated => "terminated",
    Expired => "expired",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ContractDto {
    pub id: i32,
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[validate(schema(function = "validate_contract_dates"))]
pub struct ContractFormDto {
    pub property_id: i32,
    pub tenant_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[validate(range(min = 0))]
    pub monthly_rent_cents: i64,
    #[validate(range(min = 0))]
    pub deposit_cents: i64,
    #[validate(range(min = 1, max = 28))]
    pub payment_day: i32,
    pub status: ContractStatus,
    #[validate(length(max = 5000))]
    pub notes: Option<String>,
}

fn validate_contract_dates(form: &ContractFormDto) -> Result<(), ValidationError> {
    match form.end_date {
        Some(end) if end < form.start_date => {
            let mut err = ValidationError::new("end_before_start");
            err.message = Some("End date must not be before the start date".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

/// Optional end date for terminating a contract; defaults to today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TerminateContractDto {
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractFilterDto {
    pub status: Option<ContractStatus>,
    pub property_id: Option<i32>,
    pub tenant_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(start: NaiveDate, end: Option<NaiveDate>) -> ContractFormDto {
        ContractFormDto {
            property_id: 1,
            tenant_id: 1,
            start_date: start,
            end_date: end,
            monthly_rent_cents: 100_000,
            deposit_cents: 0,
            payment_day: 1,
            status: ContractStatus::Draft,
            notes: None,
        }
    }

    #[test]
    fn rejects_end_date_before_start() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();

        assert!(form(start, Some(end)).validate().is_err());
        assert!(form(start, Some(start)).validate().is_ok());
        assert!(form(start, None).validate().is_ok());
    }

    #[test]
    fn rejects_payment_day_out_of_range() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut dto = form(start, None);
        dto.payment_day = 31;

        assert!(dto.validate().is_err());
    }

    #[test]
    fn parses_status_strings() {
        assert_eq!("active".parse::<ContractStatus>(), Ok(ContractStatus::Active));
        assert!("ACTIVE".parse::<ContractStatus>().is_err());
        assert_eq!(ContractStatus::Terminated.as_str(), "terminated");
    }
}
