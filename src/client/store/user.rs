use crate::model::user::UserDto;

/// Logged in user shared through context as `Signal<UserState>`.
#[derive(Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Set once the first `/api/auth/user` request has completed.
    pub fetched: bool,
}

impl UserState {
    pub fn is_staff(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_staff())
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin())
    }
}
