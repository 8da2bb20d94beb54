use super::*;

/// Tests logging in with the correct password.
///
/// Expected: Ok(user) with last_login_at recorded
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let user = factory::user::UserFactory::new(db, company.id)
        .email("jane@example.com")
        .password_hash(hash_password("secret-password")?)
        .build()
        .await?;

    let logged_in = AuthService::new(db)
        .login("jane@example.com", "secret-password")
        .await?;

    assert_eq!(logged_in.id, user.id);

    let reloaded = crate::server::data::user::UserRepository::new(db)
        .find_by_id(user.id)
        .await?
        .unwrap();
    assert!(reloaded.last_login_at.is_some());

    Ok(())
}

/// Tests that an unknown email and a wrong password fail the same way.
///
/// Expected: Err(InvalidCredentials) for both
#[tokio::test]
async fn rejects_unknown_email_and_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    factory::user::UserFactory::new(db, company.id)
        .email("jane@example.com")
        .password_hash(hash_password("secret-password")?)
        .build()
        .await?;

    let service = AuthService::new(db);

    let wrong_password = service.login("jane@example.com", "guess").await;
    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let unknown = service.login("nobody@example.com", "secret-password").await;
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that a disabled account cannot log in.
///
/// Expected: Err(AccountDisabled) with the right password only
#[tokio::test]
async fn rejects_disabled_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let user = factory::user::UserFactory::new(db, company.id)
        .email("gone@example.com")
        .password_hash(hash_password("secret-password")?)
        .active(false)
        .build()
        .await?;

    let service = AuthService::new(db);

    let result = service.login("gone@example.com", "secret-password").await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled(id))) if id == user.id
    ));

    let result = service.login("gone@example.com", "wrong").await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
