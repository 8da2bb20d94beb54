use chrono::{DateTime, Utc};

use crate::{
    model::property::{PropertyDto, PropertyFilterDto, PropertyFormDto},
    server::util::text::non_blank,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: i32,
    pub company_id: i32,
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

impl Property {
    pub fn from_entity(entity: entity::property::Model) -> Self {
        Self {
            id: entity.id,
            company_id: entity.company_id,
            owner_id: entity.owner_id,
            name: entity.name,
            address: entity.address,
            city: entity.city,
            postal_code: entity.postal_code,
            property_type: entity.property_type,
            monthly_rent_cents: entity.monthly_rent_cents,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PropertyDto {
        PropertyDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            address: self.address,
            city: self.city,
            postal_code: self.postal_code,
            property_type: self.property_type,
            monthly_rent_cents: self.monthly_rent_cents,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyParams {
    pub company_id: i32,
    pub owner_id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: Option<String>,
    pub property_type: String,
    pub monthly_rent_cents: i64,
    pub notes: Option<String>,
}

impl PropertyParams {
    pub fn from_dto(company_id: i32, dto: PropertyFormDto) -> Self {
        Self {
            company_id,
            owner_id: dto.owner_id,
            name: dto.name.trim().to_string(),
            address: dto.address.trim().to_string(),
            city: dto.city.trim().to_string(),
            postal_code: non_blank(dto.postal_code),
            property_type: dto.property_type.trim().to_lowercase(),
            monthly_rent_cents: dto.monthly_rent_cents,
            notes: non_blank(dto.notes),
        }
    }
}

/// List filters for properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub search: Option<String>,
    pub owner_id: Option<i32>,
    pub city: Option<String>,
}

impl PropertyFilter {
    pub fn from_dto(search: Option<String>, dto: PropertyFilterDto) -> Self {
        Self {
            search,
            owner_id: dto.owner_id,
            city: non_blank(dto.city),
        }
    }
}
