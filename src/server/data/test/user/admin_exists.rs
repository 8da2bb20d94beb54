use super::*;

/// Tests detecting when an admin exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    factory::create_admin(db, company.id).await?;

    assert!(UserRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Tests detecting a fresh installation with only managers.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_managers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    factory::create_user(db, company.id).await?;

    assert!(!UserRepository::new(db).admin_exists().await?);

    Ok(())
}
