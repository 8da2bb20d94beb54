use super::*;

/// Tests selecting contracts that ended, end soon or are due on a payment day.
///
/// Expected: each query returns only the matching active contract
#[tokio::test]
async fn selects_contracts_for_workflow_steps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let owner = factory::create_owner(db, company.id).await?;
    let tenant = factory::create_tenant(db, company.id).await?;
    let ended_property = factory::create_property(db, company.id, owner.id).await?;
    let ending_property = factory::create_property(db, company.id, owner.id).await?;
    let open_property = factory::create_property(db, company.id, owner.id).await?;

    let ended =
        factory::contract::ContractFactory::new(db, company.id, ended_property.id, tenant.id)
            .start_date(date(2024, 1, 1))
            .end_date(Some(date(2025, 5, 31)))
            .build()
            .await?;
    let ending =
        factory::contract::ContractFactory::new(db, company.id, ending_property.id, tenant.id)
            .start_date(date(2024, 1, 1))
            .end_date(Some(date(2025, 6, 20)))
            .payment_day(15)
            .build()
            .await?;
    let open =
        factory::contract::ContractFactory::new(db, company.id, open_property.id, tenant.id)
            .start_date(date(2024, 1, 1))
            .payment_day(15)
            .build()
            .await?;

    let repo = ContractRepository::new(db);
    let today = date(2025, 6, 1);

    let ended_ids: Vec<i32> = repo
        .get_active_ended_before(today)
        .await?
        .iter()
        .map(|c| c.id)
        .collect();
    let ending_ids: Vec<i32> = repo
        .get_active_ending_between(today, date(2025, 7, 1))
        .await?
        .iter()
        .map(|c| c.id)
        .collect();
    let mut due_ids: Vec<i32> = repo
        .get_active_by_payment_day(15)
        .await?
        .iter()
        .map(|c| c.id)
        .collect();
    due_ids.sort();

    assert_eq!(ended_ids, vec![ended.id]);
    assert_eq!(ending_ids, vec![ending.id]);
    assert_eq!(due_ids, vec![ending.id, open.id]);

    Ok(())
}

/// Tests counting active contracts and those expiring within a range.
///
/// Expected: 3 active, 1 expiring; the overdue contract is not expiring
#[tokio::test]
async fn counts_active_and_expiring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, owner, tenant, _, _) =
        factory::helpers::create_contract_with_dependencies(db).await?;
    let property = factory::create_property(db, company.id, owner.id).await?;
    factory::contract::ContractFactory::new(db, company.id, property.id, tenant.id)
        .end_date(Some(date(2025, 6, 10)))
        .build()
        .await?;
    // Ended before the range but not yet expired by the workflow
    let overdue = factory::create_property(db, company.id, owner.id).await?;
    factory::contract::ContractFactory::new(db, company.id, overdue.id, tenant.id)
        .start_date(date(2024, 1, 1))
        .end_date(Some(date(2025, 5, 20)))
        .build()
        .await?;

    let repo = ContractRepository::new(db);
    let scope = Scope::company(company.id);

    assert_eq!(repo.count_active(&scope, None).await?, 3);
    assert_eq!(
        repo.count_active(&scope, Some((date(2025, 6, 1), date(2025, 7, 1))))
            .await?,
        1
    );

    Ok(())
}
