//! First-admin bootstrap.
//!
//! A fresh installation has no users at all. On startup a one-time setup code is
//! generated (see [`code::SetupCodeService`]) and the setup URL is logged; whoever
//! holds the code can create the first company together with its admin account.

pub mod code;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{auth::SetupDto, user::UserRole},
    server::{
        data::{company::CompanyRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            company::{Company, CreateCompanyParams},
            user::{CreateUserParams, ProfileLink, User},
        },
        service::setup::code::SetupCodeService,
        util::{password::hash_password, text::slugify},
    },
};

pub struct SetupService<'a> {
    db: &'a DatabaseConnection,
    codes: &'a SetupCodeService,
}

impl<'a> SetupService<'a> {
    pub fn new(db: &'a DatabaseConnection, codes: &'a SetupCodeService) -> Self {
        Self { db, codes }
    }

    /// Creates the first company and its admin account.
    ///
    /// The setup code is claimed before anything else runs, so a concurrent request
    /// with the same code is rejected. The company and the admin are inserted in one
    /// transaction; when any step fails the code is released again and the attempt
    /// (e.g. after a duplicate email) can be retried with it.
    ///
    /// # Arguments
    /// - `dto` - Validated setup request carrying the code
    ///
    /// # Returns
    /// - `Ok((Company, User))` - The created company and admin
    /// - `Err(AppError::AuthErr(InvalidSetupCode))` - Code is wrong, expired, used,
    ///   or an admin already exists
    /// - `Err(AppError::BadRequest)` - The email is already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn run(&self, dto: SetupDto) -> Result<(Company, User), AppError> {
        let Some(claimed) = self.codes.claim(&dto.code).await else {
            return Err(AuthError::InvalidSetupCode.into());
        };

        match self.create(dto).await {
            Ok(created) => Ok(created),
            Err(e) => {
                self.codes.release(claimed).await;
                Err(e)
            }
        }
    }

    async fn create(&self, dto: SetupDto) -> Result<(Company, User), AppError> {
        if UserRepository::new(self.db).admin_exists().await? {
            return Err(AuthError::InvalidSetupCode.into());
        }

        let email = dto.email.trim().to_lowercase();
        if UserRepository::new(self.db).email_exists(&email).await? {
            return Err(AppError::BadRequest(
                "A user with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&dto.password)?;
        let company_name = dto.company_name.trim().to_string();
        let slug = self.unique_slug(&company_name).await?;

        let txn = self.db.begin().await?;

        let company = CompanyRepository::new(&txn)
            .create(CreateCompanyParams {
                name: company_name,
                slug,
                email: email.clone(),
            })
            .await?;

        let admin = UserRepository::new(&txn)
            .create(CreateUserParams {
                company_id: company.id,
                email,
                name: dto.admin_name.trim().to_string(),
                password_hash,
                role: UserRole::Admin,
                link: ProfileLink::default(),
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Created company '{}' ({}) with admin user {}",
            company.name,
            company.slug,
            admin.id
        );

        Ok((company, admin))
    }

    /// Derives a slug from the company name, appending `-2`, `-3`... when taken.
    async fn unique_slug(&self, name: &str) -> Result<String, AppError> {
        let repo = CompanyRepository::new(self.db);
        let base = slugify(name);

        if !repo.slug_exists(&base).await? {
            return Ok(base);
        }

        let mut suffix = 2;
        loop {
            let candidate = format!("{}-{}", base, suffix);
            if !repo.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
            suffix += 1;
        }
    }
}
