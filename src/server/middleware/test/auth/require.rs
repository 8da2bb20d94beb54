use super::*;

mod require_admin;
mod require_staff;

/// Tests that a request without a logged-in user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests that disabled accounts are rejected even without permissions.
///
/// Expected: Err(AuthError::AccountDisabled)
#[tokio::test]
async fn rejects_disabled_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let company = factory::create_company(db).await?;
    let user = factory::user::UserFactory::new(db, company.id)
        .role("admin")
        .active(false)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccountDisabled(user_id))) => {
            assert_eq!(user_id, user.id)
        }
        other => panic!("Expected AccountDisabled, got: {:?}", other),
    }

    Ok(())
}

/// Tests that an empty permission list admits any active user.
///
/// Expected: Ok(User) with the tenant's role and link
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let company = factory::create_company(db).await?;
    let tenant = factory::create_tenant(db, company.id).await?;
    let user = factory::user::UserFactory::new(db, company.id)
        .role("tenant")
        .tenant_id(Some(tenant.id))
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.role, UserRole::Tenant);
    assert_eq!(returned.tenant_id, Some(tenant.id));

    Ok(())
}
