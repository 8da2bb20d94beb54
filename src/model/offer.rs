use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::model::api::string_enum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Draft,
    Sent,
    Accepted,
    Rejected,
    Expired,
}

string_enum!(OfferStatus, "offer status", {
    Draft => "draft",
    Sent => "sent",
    Accepted => "accepted",
    Rejected => "rejected",
    Expired => "expired",
});

impl OfferStatus {
    /// Whether the offer still awaits a decision.
    pub fn is_pending(&self) -> bool {
        matches!(self, OfferStatus::Draft | OfferStatus::Sent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct OfferDto {
    pub id: i32,
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[validate(schema(function = "validate_offer_target"))]
pub struct OfferFormDto {
    pub issue_id: Option<i32>,
    pub property_id: Option<i32>,
    pub provider_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 10000))]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub amount_cents: i64,
    pub valid_until: Option<NaiveDate>,
}

fn validate_offer_target(form: &OfferFormDto) -> Result<(), ValidationError> {
    if form.issue_id.is_none() && form.property_id.is_none() {
        let mut err = ValidationError::new("missing_target");
        err.message = Some("An offer needs an issue or a property".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferFilterDto {
    pub status: Option<OfferStatus>,
    pub issue_id: Option<i32>,
    pub property_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_issue_or_property() {
        let form = OfferFormDto {
            title: "Replace boiler".to_string(),
            amount_cents: 150_000,
            ..Default::default()
        };
        assert!(form.validate().is_err());

        let form = OfferFormDto {
            issue_id: Some(3),
            ..form
        };
        assert!(form.validate().is_ok());
    }
}
