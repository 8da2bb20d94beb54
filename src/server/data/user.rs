//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts. Password hashes
//! never leave this module inside a `User`; credential checks fetch the hash through
//! `find_credentials_by_email` and everything else works on the hash-free domain model.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user::UserRole,
    server::model::user::{CreateUserParams, UpdateUserParams, User},
};

/// Repository providing database operations for user management.
///
/// Generic over the connection so the first admin can be created inside the setup
/// transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active user.
    ///
    /// # Arguments
    /// - `params` - Account fields with an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Insert failed, e.g. the email is already taken
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            company_id: ActiveValue::Set(params.company_id),
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            active: ActiveValue::Set(true),
            owner_id: ActiveValue::Set(params.link.owner_id),
            tenant_id: ActiveValue::Set(params.link.tenant_id),
            provider_id: ActiveValue::Set(params.link.provider_id),
            created_at: ActiveValue::Set(Utc::now()),
            last_login_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(user)
    }

    /// Finds a user by id regardless of company.
    ///
    /// Used by the auth guard, where the id comes from the session.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error or a stored role that no longer parses
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by id within a company.
    pub async fn find_in_company(&self, company_id: i32, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user and their password hash by email.
    ///
    /// The email is compared lowercased, matching how it is stored on creation.
    ///
    /// # Returns
    /// - `Ok(Some((User, String)))` - User and PHC password hash
    /// - `Ok(None)` - No account uses that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let Some(user) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let hash = user.password_hash.clone();

        Ok(Some((User::from_entity(user)?, hash)))
    }

    /// Gets the password hash of a user, used when changing passwords.
    pub async fn get_password_hash(&self, id: i32) -> Result<Option<String>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(|u| u.password_hash))
    }

    /// Checks whether an account already uses `email`.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.trim().to_lowercase()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of a company's users ordered by name.
    ///
    /// # Arguments
    /// - `company_id` - Company whose users are listed
    /// - `search` - Optional term matched against name and email
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((Vec<User>, u64))` - Users on the page and the total number of matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        company_id: i32,
        search: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::CompanyId.eq(company_id));

        if let Some(term) = search {
            query = query.filter(
                entity::user::Column::Name
                    .contains(&term)
                    .or(entity::user::Column::Email.contains(&term)),
            );
        }

        let paginator = query
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Gets the active staff (admins and managers) of a company.
    pub async fn get_staff(&self, company_id: i32) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::CompanyId.eq(company_id))
            .filter(entity::user::Column::Active.eq(true))
            .filter(
                entity::user::Column::Role
                    .is_in([UserRole::Admin.as_str(), UserRole::Manager.as_str()]),
            )
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Updates a user's name, role, active flag and profile link.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No such user in the company
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(params.id)
            .filter(entity::user::Column::CompanyId.eq(params.company_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = user.into_active_model();
        active.name = ActiveValue::Set(params.name);
        active.role = ActiveValue::Set(params.role.as_str().to_string());
        active.active = ActiveValue::Set(params.active);
        active.owner_id = ActiveValue::Set(params.link.owner_id);
        active.tenant_id = ActiveValue::Set(params.link.tenant_id);
        active.provider_id = ActiveValue::Set(params.link.provider_id);

        let user = active.update(self.db).await?;

        User::from_entity(user).map(Some)
    }

    /// Replaces a user's password hash.
    pub async fn set_password_hash(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::PasswordHash,
                Expr::value(password_hash),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Records a successful login.
    pub async fn touch_last_login(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::LastLoginAt, Expr::value(Utc::now()))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a user of a company.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was deleted
    /// - `Ok(false)` - No such user in the company
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks if any admin user exists in any company.
    ///
    /// Used at startup to decide whether the first-admin setup code is needed.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin exists
    /// - `Ok(false)` - Fresh installation
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
