//! Row visibility derived from the calling user's role.

use crate::server::model::user::User;

/// Which rows of a company the caller may read.
///
/// Staff see the whole company; profile-linked users only see rows related to
/// their owner, tenant or provider record. A profile role without a linked
/// profile sees nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Company,
    Owner(i32),
    Tenant(i32),
    Provider(i32),
    Nothing,
}

/// Company and visibility a query runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    pub company_id: i32,
    pub visibility: Visibility,
}

impl Scope {
    /// Unrestricted scope over a company, used by staff and background jobs.
    pub fn company(company_id: i32) -> Self {
        Self {
            company_id,
            visibility: Visibility::Company,
        }
    }

    pub fn for_user(user: &User) -> Self {
        use crate::model::user::UserRole;

        let visibility = match user.role {
            UserRole::Admin | UserRole::Manager => Visibility::Company,
            UserRole::Owner => user.owner_id.map_or(Visibility::Nothing, Visibility::Owner),
            UserRole::Tenant => user
                .tenant_id
                .map_or(Visibility::Nothing, Visibility::Tenant),
            UserRole::Provider => user
                .provider_id
                .map_or(Visibility::Nothing, Visibility::Provider),
        };

        Self {
            company_id: user.company_id,
            visibility,
        }
    }

    pub fn is_company(&self) -> bool {
        self.visibility == Visibility::Company
    }
}
