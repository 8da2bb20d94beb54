use super::*;

/// Tests looking up credentials case-insensitively.
///
/// Expected: Ok(Some) with the stored hash
#[tokio::test]
async fn finds_hash_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let repo = UserRepository::new(db);
    let user = repo
        .create(params(company.id, "jane@example.com", UserRole::Admin))
        .await?;

    let (found, hash) = repo
        .find_credentials_by_email("  Jane@Example.com ")
        .await?
        .unwrap();

    assert_eq!(found.id, user.id);
    assert_eq!(hash, "hash");

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .find_credentials_by_email("nobody@example.com")
        .await?;

    assert!(result.is_none());

    Ok(())
}
