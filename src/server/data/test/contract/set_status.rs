use super::*;

/// Tests terminating a contract.
///
/// Expected: Ok(Some) with status terminated and the given end date
#[tokio::test]
async fn terminates_with_end_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, _, _, contract) =
        factory::helpers::create_contract_with_dependencies(db).await?;

    let updated = ContractRepository::new(db)
        .set_status(
            company.id,
            contract.id,
            ContractStatus::Terminated,
            Some(date(2026, 3, 31)),
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, ContractStatus::Terminated);
    assert_eq!(updated.end_date, Some(date(2026, 3, 31)));

    Ok(())
}

/// Tests changing the status of another company's contract.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, contract) = factory::helpers::create_contract_with_dependencies(db).await?;
    let other = factory::create_company(db).await?;

    let result = ContractRepository::new(db)
        .set_status(other.id, contract.id, ContractStatus::Terminated, None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
