use super::*;

/// Tests creating a property for an owner of the company.
///
/// Expected: Ok(property) in the company
#[tokio::test]
async fn creates_property_for_own_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let owner = factory::create_owner(db, company.id).await?;

    let property = PropertyService::new(db)
        .create(params(company.id, owner.id))
        .await?;

    assert_eq!(property.company_id, company.id);
    assert_eq!(property.owner_id, owner.id);
    assert_eq!(property.monthly_rent_cents, 145_000);

    Ok(())
}

/// Tests that an owner of another company is refused.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_foreign_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let other = factory::create_company(db).await?;
    let foreign_owner = factory::create_owner(db, other.id).await?;

    let result = PropertyService::new(db)
        .create(params(company.id, foreign_owner.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
