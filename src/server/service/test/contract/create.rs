use super::*;

/// Tests that a property can only have one active contract.
///
/// Expected: second active contract refused, draft allowed
#[tokio::test]
async fn allows_one_active_contract_per_property() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let first_tenant = factory::create_tenant(db, company.id).await?;
    let second_tenant = factory::create_tenant(db, company.id).await?;

    let service = ContractService::new(db);

    let active = service
        .create(params(company.id, property.id, first_tenant.id))
        .await?;
    assert_eq!(active.status, ContractStatus::Active);

    let result = service
        .create(params(company.id, property.id, second_tenant.id))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let mut draft = params(company.id, property.id, second_tenant.id);
    draft.status = ContractStatus::Draft;
    assert!(service.create(draft).await.is_ok());

    // Re-saving the active contract itself is not a conflict
    let mut same = params(company.id, property.id, first_tenant.id);
    same.monthly_rent_cents = 130_000;
    let updated = service.update(active.id, same).await?;
    assert_eq!(updated.monthly_rent_cents, 130_000);

    Ok(())
}

/// Tests that references to another company are refused.
///
/// Expected: Err(BadRequest) for a foreign property and a foreign tenant
#[tokio::test]
async fn rejects_foreign_references() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let tenant = factory::create_tenant(db, company.id).await?;
    let (other, _, foreign_property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let foreign_tenant = factory::create_tenant(db, other.id).await?;

    let service = ContractService::new(db);

    let result = service
        .create(params(company.id, foreign_property.id, tenant.id))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service
        .create(params(company.id, property.id, foreign_tenant.id))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that the end date may not precede the start date.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_end_before_start() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let tenant = factory::create_tenant(db, company.id).await?;

    let mut invalid = params(company.id, property.id, tenant.id);
    invalid.end_date = Some(date(2024, 12, 31));

    let result = ContractService::new(db).create(invalid).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
