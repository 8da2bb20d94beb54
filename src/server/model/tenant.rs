use chrono::{DateTime, Utc};

use crate::{
    model::tenant::{TenantDto, TenantFormDto},
    server::util::text::non_blank,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Tenant {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    pub fn from_entity(entity: entity::tenant::Model) -> Self {
        Self {
            id: entity.id,
            company_id: entity.company_id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TenantDto {
        TenantDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TenantParams {
    pub company_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl TenantParams {
    pub fn from_dto(company_id: i32, dto: TenantFormDto) -> Self {
        Self {
            company_id,
            name: dto.name.trim().to_string(),
            email: non_blank(dto.email),
            phone: non_blank(dto.phone),
            notes: non_blank(dto.notes),
        }
    }
}
