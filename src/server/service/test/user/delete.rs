use super::*;

/// Tests deleting users.
///
/// Expected: own account refused, colleague deleted, foreign user not found
#[tokio::test]
async fn deletes_users_of_own_company() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let other = factory::create_company(db).await?;
    let admin = as_user(factory::create_admin(db, company.id).await?);
    let manager = factory::create_user(db, company.id).await?;
    let stranger = factory::create_user(db, other.id).await?;

    let service = UserService::new(db);

    assert!(matches!(
        service.delete(&admin, admin.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.delete(&admin, stranger.id).await,
        Err(AppError::NotFound(_))
    ));

    service.delete(&admin, manager.id).await?;
    assert!(matches!(
        service.delete(&admin, manager.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
