use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::api::string_enum;

/// Role of a user account within its company.
///
/// `Admin` and `Manager` are staff and see every record of the company; the
/// remaining roles are linked to an owner, tenant or provider profile and only
/// see records related to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Owner,
    Tenant,
    Provider,
}

string_enum!(UserRole, "user role", {
    Admin => "admin",
    Manager => "manager",
    Owner => "owner",
    Tenant => "tenant",
    Provider => "provider",
});

impl UserRole {
    pub fn is_staff(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Manager)
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::Manager => "Manager",
            UserRole::Owner => "Owner",
            UserRole::Tenant => "Tenant",
            UserRole::Provider => "Provider",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
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

impl UserDto {
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateUserDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    pub role: UserRole,
    pub owner_id: Option<i32>,
    pub tenant_id: Option<i32>,
    pub provider_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub role: UserRole,
    pub active: bool,
    pub owner_id: Option<i32>,
    pub tenant_id: Option<i32>,
    pub provider_id: Option<i32>,
}
