use chrono::{DateTime, Utc};

use crate::{
    model::owner::{OwnerDto, OwnerFormDto},
    server::util::text::non_blank,
};

/// A property owner whose properties the company manages.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub iban: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Owner {
    pub fn from_entity(entity: entity::owner::Model) -> Self {
        Self {
            id: entity.id,
            company_id: entity.company_id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            address: entity.address,
            iban: entity.iban,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> OwnerDto {
        OwnerDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            iban: self.iban,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

/// Field values of an owner, shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerParams {
    pub company_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub iban: Option<String>,
    pub notes: Option<String>,
}

impl OwnerParams {
    pub fn from_dto(company_id: i32, dto: OwnerFormDto) -> Self {
        Self {
            company_id,
            name: dto.name.trim().to_string(),
            email: non_blank(dto.email),
            phone: non_blank(dto.phone),
            address: non_blank(dto.address),
            iban: non_blank(dto.iban).map(|iban| iban.replace(' ', "").to_uppercase()),
            notes: non_blank(dto.notes),
        }
    }
}
