use super::*;

/// Tests that managers pass the staff check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_manager() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let company = factory::create_company(db).await?;
    let user = factory::create_user(db, company.id).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session)
        .require(&[Permission::Staff])
        .await?;

    assert_eq!(returned.role, UserRole::Manager);

    Ok(())
}

/// Tests that profile users fail the staff check.
///
/// Expected: Err(AuthError::AccessDenied) naming the role
#[tokio::test]
async fn denies_owner_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let company = factory::create_company(db).await?;
    let owner = factory::create_owner(db, company.id).await?;
    let user = factory::user::UserFactory::new(db, company.id)
        .role("owner")
        .owner_id(Some(owner.id))
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Staff])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("owner"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}
