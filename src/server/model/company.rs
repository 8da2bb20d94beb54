use chrono::{DateTime, Utc};

use crate::{
    model::company::{CompanyDto, UpdateCompanyDto},
    server::util::text::non_blank,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub management_fee_bps: i32,
    pub created_at: DateTime<Utc>,
}

impl Company {
    pub fn from_entity(entity: entity::company::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            email: entity.email,
            phone: entity.phone,
            address: entity.address,
            management_fee_bps: entity.management_fee_bps,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CompanyDto {
        CompanyDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            email: self.email,
            phone: self.phone,
            address: self.address,
            management_fee_bps: self.management_fee_bps,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCompanyParams {
    pub name: String,
    pub slug: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct UpdateCompanyParams {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub management_fee_bps: i32,
}

impl UpdateCompanyParams {
    pub fn from_dto(id: i32, dto: UpdateCompanyDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            phone: non_blank(dto.phone),
            address: non_blank(dto.address),
            management_fee_bps: dto.management_fee_bps,
        }
    }
}
