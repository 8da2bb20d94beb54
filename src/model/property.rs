use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PropertyDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: Option<String>,
    pub property_type: String,
    pub monthly_rent_cents: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PropertyFormDto {
    pub owner_id: i32,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 250))]
    pub address: String,
    #[validate(length(min = 1, max = 120))]
    pub city: String,
    #[validate(length(max = 20))]
    pub postal_code: Option<String>,
    #[validate(length(min = 1, max = 40))]
    pub property_type: String,
    #[validate(range(min = 0))]
    pub monthly_rent_cents: i64,
    #[validate(length(max = 5000))]
    pub notes: Option<String>,
}

/// Entity specific filters for the property list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyFilterDto {
    pub owner_id: Option<i32>,
    pub city: Option<String>,
}
