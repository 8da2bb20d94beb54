use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::AuthService,
    util::password::hash_password,
};
use test_utils::{builder::TestBuilder, factory};

mod change_password;
mod login;
