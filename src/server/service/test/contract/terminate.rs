use super::*;

/// Tests terminating an active contract with an explicit end date.
///
/// Expected: status terminated, end date set, property free for a new contract
#[tokio::test]
async fn terminates_active_contract() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, tenant, property, contract) =
        factory::helpers::create_contract_with_dependencies(db).await?;

    let service = ContractService::new(db);
    let end = chrono::Utc::now().date_naive();

    let terminated = service.terminate(company.id, contract.id, Some(end)).await?;
    assert_eq!(terminated.status, ContractStatus::Terminated);
    assert_eq!(terminated.end_date, Some(end));

    let reloaded = service
        .get_by_id(&Scope::company(company.id), contract.id)
        .await?;
    assert_eq!(reloaded.status, ContractStatus::Terminated);

    assert!(service
        .create(params(company.id, property.id, tenant.id))
        .await
        .is_ok());

    Ok(())
}

/// Tests that only active contracts can be terminated.
///
/// Expected: second termination refused with BadRequest
#[tokio::test]
async fn rejects_terminating_twice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, _, _, contract) =
        factory::helpers::create_contract_with_dependencies(db).await?;

    let service = ContractService::new(db);
    service.terminate(company.id, contract.id, None).await?;

    let result = service.terminate(company.id, contract.id, None).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that an end date before the start is refused.
///
/// Expected: Err(BadRequest), contract stays active
#[tokio::test]
async fn rejects_end_before_start() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, _, _, contract) =
        factory::helpers::create_contract_with_dependencies(db).await?;

    let service = ContractService::new(db);
    let before_start = contract.start_date.pred_opt().unwrap();

    let result = service
        .terminate(company.id, contract.id, Some(before_start))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let reloaded = service
        .get_by_id(&Scope::company(company.id), contract.id)
        .await?;
    assert_eq!(reloaded.status, ContractStatus::Active);

    Ok(())
}

/// Tests that contracts of another company cannot be terminated.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn hides_foreign_contract() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, contract) =
        factory::helpers::create_contract_with_dependencies(db).await?;
    let other = factory::create_company(db).await?;

    let result = ContractService::new(db)
        .terminate(other.id, contract.id, None)
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
