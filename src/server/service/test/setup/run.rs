use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that a valid code creates the company and its admin.
///
/// Expected: company with a slug, admin with a lowercased email, code consumed
#[tokio::test]
async fn creates_company_and_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = SetupCodeService::new();
    let code = codes.generate().await;

    let (company, admin) = SetupService::new(db, &codes).run(setup_dto(&code)).await?;

    assert_eq!(company.name, "Acme Rentals");
    assert_eq!(company.slug, "acme-rentals");
    assert_eq!(admin.company_id, company.id);
    assert_eq!(admin.role, UserRole::Admin);
    assert_eq!(admin.email, "ada@example.com");
    assert!(UserRepository::new(db).admin_exists().await?);
    assert!(!codes.has_valid_code().await);

    Ok(())
}

/// Tests that a wrong code is rejected without creating anything.
///
/// Expected: Err(InvalidSetupCode), code still valid
#[tokio::test]
async fn rejects_wrong_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = SetupCodeService::new();
    codes.generate().await;

    let result = SetupService::new(db, &codes).run(setup_dto("nope")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidSetupCode))
    ));
    assert!(!UserRepository::new(db).admin_exists().await?);
    assert!(codes.has_valid_code().await);

    Ok(())
}

/// Tests that setup refuses to run once an admin exists.
///
/// Expected: Err(InvalidSetupCode) even with a fresh code
#[tokio::test]
async fn rejects_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    factory::create_admin(db, company.id).await?;

    let codes = SetupCodeService::new();
    let code = codes.generate().await;

    let result = SetupService::new(db, &codes).run(setup_dto(&code)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidSetupCode))
    ));

    Ok(())
}

/// Tests that a taken slug gets a numeric suffix.
///
/// Expected: "acme-rentals-2"
#[tokio::test]
async fn suffixes_taken_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::company::CompanyFactory::new(db)
        .name("Acme Rentals")
        .slug("acme-rentals")
        .build()
        .await?;

    let codes = SetupCodeService::new();
    let code = codes.generate().await;

    let (company, _) = SetupService::new(db, &codes).run(setup_dto(&code)).await?;

    assert_eq!(company.slug, "acme-rentals-2");

    Ok(())
}

/// Tests that two concurrent setups presented with the same code create one admin.
///
/// Expected: exactly one Ok, the other Err(InvalidSetupCode), one company
#[tokio::test]
async fn concurrent_setups_share_one_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = SetupCodeService::new();
    let code = codes.generate().await;

    let mut second = setup_dto(&code);
    second.company_name = "Other Lettings".to_string();
    second.email = "grace@example.com".to_string();

    let service = SetupService::new(db, &codes);
    let (a, b) = tokio::join!(service.run(setup_dto(&code)), service.run(second));

    let succeeded = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(succeeded, 1);
    for result in [a, b] {
        if let Err(e) = result {
            assert!(matches!(e, AppError::AuthErr(AuthError::InvalidSetupCode)));
        }
    }
    assert_eq!(entity::prelude::Company::find().count(db).await?, 1);
    assert!(!codes.has_valid_code().await);

    Ok(())
}

/// Tests that a failed setup leaves the code usable for a retry.
///
/// Expected: duplicate email rejected, retry with another email succeeds
#[tokio::test]
async fn failed_setup_releases_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    factory::user::UserFactory::new(db, company.id)
        .email("ada@example.com")
        .build()
        .await?;

    let codes = SetupCodeService::new();
    let code = codes.generate().await;
    let service = SetupService::new(db, &codes);

    let result = service.run(setup_dto(&code)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(codes.has_valid_code().await);

    let mut retry = setup_dto(&code);
    retry.email = "grace@example.com".to_string();
    let (_, admin) = service.run(retry).await?;

    assert_eq!(admin.email, "grace@example.com");
    assert!(!codes.has_valid_code().await);

    Ok(())
}
