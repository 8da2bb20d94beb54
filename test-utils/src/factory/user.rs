//! User factory for creating test user accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// The default password hash is not a valid Argon2 hash; tests exercising login
/// should hash a password with the server's password utilities and pass it through
/// `password_hash`.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db, company.id)
///     .email("jane@example.com")
///     .role("tenant")
///     .tenant_id(Some(tenant.id))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    email: String,
    name: String,
    password_hash: String,
    role: String,
    active: bool,
    owner_id: Option<i32>,
    tenant_id: Option<i32>,
    provider_id: Option<i32>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"`
    /// - name: `"User {id}"`
    /// - role: `"manager"`
    /// - active: `true`
    /// - no linked profile
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            company_id,
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            password_hash: "unusable".to_string(),
            role: "manager".to_string(),
            active: true,
            owner_id: None,
            tenant_id: None,
            provider_id: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password_hash = hash.into();
        self
    }

    /// Sets the role string (`admin`, `manager`, `owner`, `tenant`, `provider`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn owner_id(mut self, owner_id: Option<i32>) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn tenant_id(mut self, tenant_id: Option<i32>) -> Self {
        self.tenant_id = tenant_id;
        self
    }

    pub fn provider_id(mut self, provider_id: Option<i32>) -> Self {
        self.provider_id = provider_id;
        self
    }

    /// Builds and inserts the user.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            company_id: ActiveValue::Set(self.company_id),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            active: ActiveValue::Set(self.active),
            owner_id: ActiveValue::Set(self.owner_id),
            tenant_id: ActiveValue::Set(self.tenant_id),
            provider_id: ActiveValue::Set(self.provider_id),
            created_at: ActiveValue::Set(Utc::now()),
            last_login_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a manager user with default values.
pub async fn create_user(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, company_id).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, company_id).role("admin").build().await
}
