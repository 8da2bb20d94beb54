//! Email and password authentication.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks credentials and records the login time.
    ///
    /// Unknown emails and wrong passwords produce the same error so callers cannot
    /// probe which accounts exist. The password is checked before the account
    /// status, which keeps disabled accounts from being enumerated as well.
    ///
    /// # Arguments
    /// - `email` - Login email, matched case-insensitively
    /// - `password` - Plain text password
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated, active user
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No match
    /// - `Err(AppError::AuthErr(AccountDisabled))` - Correct password, disabled account
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some((user, password_hash)) = repo.find_credentials_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.active {
            return Err(AuthError::AccountDisabled(user.id).into());
        }

        repo.touch_last_login(user.id).await?;

        tracing::debug!("User {} logged in", user.id);

        Ok(user)
    }

    /// Replaces a user's password after verifying the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::BadRequest)` - Current password is wrong
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - User vanished
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(password_hash) = repo.get_password_hash(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !verify_password(current_password, &password_hash) {
            return Err(AppError::BadRequest(
                "Current password is incorrect".to_string(),
            ));
        }

        repo.set_password_hash(user_id, hash_password(new_password)?)
            .await?;

        Ok(())
    }
}
