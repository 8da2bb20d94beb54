use super::*;

/// Tests updating an owner.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn updates_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let owner = factory::create_owner(db, company.id).await?;

    let mut update = params(company.id, "Renamed");
    update.phone = Some("+49 30 1234".to_string());

    let updated = OwnerRepository::new(db).update(owner.id, update).await?;

    let updated = updated.expect("owner should exist");
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.phone.as_deref(), Some("+49 30 1234"));

    Ok(())
}

/// Tests updating an owner through another company.
///
/// Expected: Ok(None) and the owner unchanged
#[tokio::test]
async fn returns_none_for_other_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let other = factory::create_company(db).await?;
    let owner = factory::create_owner(db, company.id).await?;

    let repo = OwnerRepository::new(db);
    let result = repo.update(owner.id, params(other.id, "Hijacked")).await?;

    assert!(result.is_none());
    let stored = repo.find_by_id(company.id, owner.id).await?.unwrap();
    assert_eq!(stored.name, owner.name);

    Ok(())
}
