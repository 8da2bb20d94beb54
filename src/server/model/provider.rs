use chrono::{DateTime, Utc};

use crate::{
    model::provider::{ProviderDto, ProviderFormDto},
    server::util::text::non_blank,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Provider {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service_type: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Provider {
    pub fn from_entity(entity: entity::provider::Model) -> Self {
        Self {
            id: entity.id,
            company_id: entity.company_id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            service_type: entity.service_type,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ProviderDto {
        ProviderDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            service_type: self.service_type,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderParams {
    pub company_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service_type: Option<String>,
    pub notes: Option<String>,
}

impl ProviderParams {
    pub fn from_dto(company_id: i32, dto: ProviderFormDto) -> Self {
        Self {
            company_id,
            name: dto.name.trim().to_string(),
            email: non_blank(dto.email),
            phone: non_blank(dto.phone),
            service_type: non_blank(dto.service_type),
            notes: non_blank(dto.notes),
        }
    }
}
