use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto, UserRole},
    server::util::parse::parse_column,
};

/// An authenticated or managed user account.
///
/// Never carries the password hash; the repository exposes hashes separately for
/// credential checks.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub company_id: i32,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub active: bool,
    pub owner_id: Option<i32>,
    pub tenant_id: Option<i32>,
    pub provider_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            company_id: entity.company_id,
            email: entity.email,
            name: entity.name,
            role: parse_column(&entity.role)?,
            active: entity.active,
            owner_id: entity.owner_id,
            tenant_id: entity.tenant_id,
            provider_id: entity.provider_id,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            company_id: self.company_id,
            email: self.email,
            name: self.name,
            role: self.role,
            active: self.active,
            owner_id: self.owner_id,
            tenant_id: self.tenant_id,
            provider_id: self.provider_id,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        }
    }

    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}

/// Profile links of a user; only the one matching the role is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfileLink {
    pub owner_id: Option<i32>,
    pub tenant_id: Option<i32>,
    pub provider_id: Option<i32>,
}

impl ProfileLink {
    /// Drops links that do not belong to `role`.
    pub fn for_role(
        role: UserRole,
        owner_id: Option<i32>,
        tenant_id: Option<i32>,
        provider_id: Option<i32>,
    ) -> Self {
        match role {
            UserRole::Admin | UserRole::Manager => Self::default(),
            UserRole::Owner => Self {
                owner_id,
                ..Default::default()
            },
            UserRole::Tenant => Self {
                tenant_id,
                ..Default::default()
            },
            UserRole::Provider => Self {
                provider_id,
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub company_id: i32,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub link: ProfileLink,
}

impl CreateUserParams {
    /// Builds params from the request; the password is hashed by the caller.
    pub fn from_dto(company_id: i32, password_hash: String, dto: CreateUserDto) -> Self {
        Self {
            company_id,
            email: dto.email.trim().to_lowercase(),
            name: dto.name.trim().to_string(),
            password_hash,
            role: dto.role,
            link: ProfileLink::for_role(dto.role, dto.owner_id, dto.tenant_id, dto.provider_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub role: UserRole,
    pub active: bool,
    pub link: ProfileLink,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, company_id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            company_id,
            name: dto.name.trim().to_string(),
            role: dto.role,
            active: dto.active,
            link: ProfileLink::for_role(dto.role, dto.owner_id, dto.tenant_id, dto.provider_id),
        }
    }
}
