//! User account management for company admins.
//!
//! Admins create accounts for their staff and for the owners, tenants and
//! providers they work with. Profile roles are linked to the matching owner,
//! tenant or provider record of the same company, which is what drives the
//! role-scoped visibility of everything those users read.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, UserRole},
    server::{
        data::{
            owner::OwnerRepository, provider::ProviderRepository, tenant::TenantRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            user::{CreateUserParams, ProfileLink, UpdateUserParams, User},
            Paginated,
        },
        util::password::hash_password,
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the users of a company with pagination.
    ///
    /// # Arguments
    /// - `company_id` - Company whose users are listed
    /// - `search` - Optional term matched against name and email
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok(Paginated<User>)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        company_id: i32,
        search: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_paginated(company_id, search, page, per_page)
            .await?;

        Ok(Paginated::new(users, total, page, per_page))
    }

    /// Creates a user account in the admin's company.
    ///
    /// # Arguments
    /// - `company_id` - Company of the calling admin
    /// - `dto` - Validated request with the plain text password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Email taken or profile link invalid
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, company_id: i32, dto: CreateUserDto) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_exists(&dto.email).await? {
            return Err(AppError::BadRequest(
                "A user with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&dto.password)?;
        let params = CreateUserParams::from_dto(company_id, password_hash, dto);

        self.check_profile_link(company_id, params.role, params.link)
            .await?;

        Ok(repo.create(params).await?)
    }

    /// Updates name, role, active flag and profile link of a user.
    ///
    /// Admins cannot demote or disable themselves, which guarantees every company
    /// keeps at least the admin performing the change.
    ///
    /// # Arguments
    /// - `actor` - The admin performing the update
    /// - `params` - New values, `params.id` is the target user
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No such user in the company
    /// - `Err(AppError::BadRequest)` - Self-demotion or invalid profile link
    pub async fn update(&self, actor: &User, params: UpdateUserParams) -> Result<User, AppError> {
        if params.id == actor.id && (params.role != UserRole::Admin || !params.active) {
            return Err(AppError::BadRequest(
                "You cannot demote or disable your own account".to_string(),
            ));
        }

        self.check_profile_link(params.company_id, params.role, params.link)
            .await?;

        let id = params.id;
        UserRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Deletes a user of the admin's company.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::BadRequest)` - Attempt to delete yourself
    /// - `Err(AppError::NotFound)` - No such user in the company
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        if id == actor.id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        let deleted = UserRepository::new(self.db)
            .delete(actor.company_id, id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        Ok(())
    }

    /// Ensures a profile role is linked to a record of the same company.
    async fn check_profile_link(
        &self,
        company_id: i32,
        role: UserRole,
        link: ProfileLink,
    ) -> Result<(), AppError> {
        let found = match role {
            UserRole::Admin | UserRole::Manager => return Ok(()),
            UserRole::Owner => match link.owner_id {
                Some(id) => OwnerRepository::new(self.db)
                    .find_by_id(company_id, id)
                    .await?
                    .is_some(),
                None => false,
            },
            UserRole::Tenant => match link.tenant_id {
                Some(id) => TenantRepository::new(self.db)
                    .find_by_id(company_id, id)
                    .await?
                    .is_some(),
                None => false,
            },
            UserRole::Provider => match link.provider_id {
                Some(id) => ProviderRepository::new(self.db)
                    .find_by_id(company_id, id)
                    .await?
                    .is_some(),
                None => false,
            },
        };

        if !found {
            return Err(AppError::BadRequest(format!(
                "A {} account must be linked to a {} of your company",
                role, role
            )));
        }

        Ok(())
    }
}
