use super::*;

/// Tests deleting an owner.
///
/// Expected: Ok(true), then the owner is gone
#[tokio::test]
async fn deletes_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let owner = factory::create_owner(db, company.id).await?;

    let repo = OwnerRepository::new(db);

    assert!(repo.delete(company.id, owner.id).await?);
    assert!(repo.find_by_id(company.id, owner.id).await?.is_none());
    assert_eq!(repo.count(company.id).await?, 0);

    Ok(())
}

/// Tests deleting an owner of another company.
///
/// Expected: Ok(false) and the owner kept
#[tokio::test]
async fn ignores_other_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let other = factory::create_company(db).await?;
    let owner = factory::create_owner(db, company.id).await?;

    let repo = OwnerRepository::new(db);

    assert!(!repo.delete(other.id, owner.id).await?);
    assert_eq!(repo.count(company.id).await?, 1);

    Ok(())
}
