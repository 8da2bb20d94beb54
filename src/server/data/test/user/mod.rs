use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        model::user::{CreateUserParams, ProfileLink, UpdateUserParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_credentials_by_email;
mod get_staff;
mod update;

fn params(company_id: i32, email: &str, role: UserRole) -> CreateUserParams {
    CreateUserParams {
        company_id,
        email: email.to_string(),
        name: "Test User".to_string(),
        password_hash: "hash".to_string(),
        role,
        link: ProfileLink::default(),
    }
}
