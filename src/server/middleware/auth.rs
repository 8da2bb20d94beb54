use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Permission a route requires from the session user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Admin or manager of the company.
    Staff,
    /// Admin of the company.
    Admin,
}

/// Loads the session user and checks route permissions.
///
/// Every successful check returns the active user; disabled accounts are rejected
/// even when no permission is required.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in, active user holding all `permissions`.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session points at a deleted user
    /// - `Err(AuthError::AccountDisabled)` - The user was deactivated
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.active {
            return Err(AuthError::AccountDisabled(user_id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Staff => {
                    if !user.is_staff() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("{} user attempted a staff-only operation", user.role),
                        )
                        .into());
                    }
                }
                Permission::Admin => {
                    if user.role != crate::model::user::UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an operation requiring admin permissions".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
