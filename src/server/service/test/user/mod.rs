use super::as_user;
use crate::{
    model::user::{CreateUserDto, UserRole},
    server::{
        error::AppError,
        model::user::{ProfileLink, UpdateUserParams},
        service::user::UserService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn create_dto(email: &str, role: UserRole) -> CreateUserDto {
    CreateUserDto {
        email: email.to_string(),
        name: "New User".to_string(),
        password: "long-enough-password".to_string(),
        role,
        owner_id: None,
        tenant_id: None,
        provider_id: None,
    }
}
