use super::*;

/// Tests changing the password with the correct current password.
///
/// Expected: old password stops working, new one logs in
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let user = factory::user::UserFactory::new(db, company.id)
        .email("jane@example.com")
        .password_hash(hash_password("old-password")?)
        .build()
        .await?;

    let service = AuthService::new(db);
    service
        .change_password(user.id, "old-password", "new-password")
        .await?;

    assert!(service.login("jane@example.com", "old-password").await.is_err());
    assert!(service.login("jane@example.com", "new-password").await.is_ok());

    Ok(())
}

/// Tests that a wrong current password is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let user = factory::user::UserFactory::new(db, company.id)
        .password_hash(hash_password("old-password")?)
        .build()
        .await?;

    let result = AuthService::new(db)
        .change_password(user.id, "not-it", "new-password")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
