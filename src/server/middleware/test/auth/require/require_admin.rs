use super::*;

/// Tests that admins pass the admin check.
///
/// Expected: Ok(User) with role admin
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let company = factory::create_company(db).await?;
    let admin = factory::create_admin(db, company.id).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let returned = AuthGuard::new(db, session)
        .require(&[Permission::Staff, Permission::Admin])
        .await?;

    assert_eq!(returned.id, admin.id);
    assert_eq!(returned.role, UserRole::Admin);

    Ok(())
}

/// Tests that managers fail the admin check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_manager() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let company = factory::create_company(db).await?;
    let manager = factory::create_user(db, company.id).await?;
    AuthSession::new(session).set_user_id(manager.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, manager.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}
