use super::*;

/// Tests creating an owner.
///
/// Verifies that the repository stores all fields and that the new owner can be
/// found again within its company only.
///
/// Expected: Ok with owner visible to its company and hidden from others
#[tokio::test]
async fn creates_owner_scoped_to_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let other = factory::create_company(db).await?;

    let repo = OwnerRepository::new(db);
    let owner = repo.create(params(company.id, "Alice")).await?;

    assert_eq!(owner.company_id, company.id);
    assert_eq!(owner.name, "Alice");
    assert_eq!(owner.iban.as_deref(), Some("DE89370400440532013000"));

    assert!(repo.find_by_id(company.id, owner.id).await?.is_some());
    assert!(repo.find_by_id(other.id, owner.id).await?.is_none());

    Ok(())
}

/// Tests creating an owner for a company that doesn't exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OwnerRepository::new(db).create(params(999, "Ghost")).await;

    assert!(result.is_err());

    Ok(())
}
