use crate::{
    model::{auth::SetupDto, user::UserRole},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        service::setup::{code::SetupCodeService, SetupService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod run;

fn setup_dto(code: &str) -> SetupDto {
    SetupDto {
        code: code.to_string(),
        company_name: "Acme Rentals".to_string(),
        admin_name: "Ada Admin".to_string(),
        email: "Ada@Example.com".to_string(),
        password: "correct horse battery".to_string(),
    }
}
