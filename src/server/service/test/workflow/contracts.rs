use super::*;
use sea_orm::ConnectionTrait;

/// Tests that ended contracts are expired and the owner is told once.
///
/// Expected: first run expires and notifies, second run does nothing
#[tokio::test]
async fn expires_ended_contracts_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let tenant = factory::create_tenant(db, company.id).await?;
    let contract = factory::contract::ContractFactory::new(db, company.id, property.id, tenant.id)
        .start_date(date(2024, 5, 10))
        .end_date(Some(date(2025, 5, 9)))
        .build()
        .await?;
    // Ends today, stays active
    let (_, _, other_property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let other_tenant = factory::create_tenant(db, other_property.company_id).await?;
    let running = factory::contract::ContractFactory::new(
        db,
        other_property.company_id,
        other_property.id,
        other_tenant.id,
    )
    .start_date(date(2024, 5, 10))
    .end_date(Some(date(2025, 5, 10)))
    .build()
    .await?;

    let email = email();
    let service = WorkflowService::new(db, &email, retention());

    let run = service.run_at(now()).await;
    assert!(run.steps.iter().all(|s| s.error.is_none()));
    assert_eq!(run.processed(WorkflowStep::ExpireContracts), 1);

    let repo = ContractRepository::new(db);
    let expired = repo
        .find_by_id(&Scope::company(company.id), contract.id)
        .await?
        .unwrap();
    assert_eq!(expired.status, ContractStatus::Expired);
    let still_running = repo
        .find_by_id(&Scope::company(other_property.company_id), running.id)
        .await?
        .unwrap();
    assert_eq!(still_running.status, ContractStatus::Active);

    let again = service.run_at(now()).await;
    assert_eq!(again.processed(WorkflowStep::ExpireContracts), 0);

    Ok(())
}

/// Tests that a failed party lookup leaves ended contracts active for the next run.
///
/// Expected: step errors without expiring, succeeds once the lookup works again
#[tokio::test]
async fn keeps_contracts_active_when_lookup_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let tenant = factory::create_tenant(db, company.id).await?;
    let contract = factory::contract::ContractFactory::new(db, company.id, property.id, tenant.id)
        .start_date(date(2024, 5, 10))
        .end_date(Some(date(2025, 5, 9)))
        .build()
        .await?;

    db.execute_unprepared("ALTER TABLE tenant RENAME TO tenant_moved")
        .await?;

    let email = email();
    let service = WorkflowService::new(db, &email, retention());

    let run = service.run_at(now()).await;
    let step = run
        .steps
        .iter()
        .find(|s| s.step == WorkflowStep::ExpireContracts)
        .unwrap();
    assert!(step.error.is_some());
    assert_eq!(step.processed, 0);

    let repo = ContractRepository::new(db);
    let unchanged = repo
        .find_by_id(&Scope::company(company.id), contract.id)
        .await?
        .unwrap();
    assert_eq!(unchanged.status, ContractStatus::Active);

    db.execute_unprepared("ALTER TABLE tenant_moved RENAME TO tenant")
        .await?;

    let retry = service.run_at(now()).await;
    assert_eq!(retry.processed(WorkflowStep::ExpireContracts), 1);

    Ok(())
}

/// Tests that tenant and owner get one reminder per contract end date.
///
/// Expected: two emails on the first run, none on the second
#[tokio::test]
async fn reminds_of_expiring_contracts_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let tenant = factory::create_tenant(db, company.id).await?;
    factory::contract::ContractFactory::new(db, company.id, property.id, tenant.id)
        .start_date(date(2024, 6, 1))
        .end_date(Some(date(2025, 5, 31)))
        .build()
        .await?;
    // Ends after the reminder window
    let later_property = factory::create_property(db, company.id, property.owner_id).await?;
    factory::contract::ContractFactory::new(db, company.id, later_property.id, tenant.id)
        .start_date(date(2024, 9, 1))
        .end_date(Some(date(2025, 8, 31)))
        .build()
        .await?;

    let email = email();
    let service = WorkflowService::new(db, &email, retention());

    let run = service.run_at(now()).await;
    assert_eq!(run.processed(WorkflowStep::ContractExpiryReminders), 2);

    let again = service.run_at(now()).await;
    assert_eq!(again.processed(WorkflowStep::ContractExpiryReminders), 0);

    Ok(())
}

/// Tests monthly rent reminders.
///
/// Expected: one email on the payment day, none again that month, one next month
#[tokio::test]
async fn reminds_of_rent_once_per_month() -> Result<(), AppError> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let tenant = factory::create_tenant(db, company.id).await?;
    factory::contract::ContractFactory::new(db, company.id, property.id, tenant.id)
        .start_date(date(2024, 1, 1))
        .payment_day(10)
        .build()
        .await?;
    // Tenant without email is skipped
    let silent = factory::tenant::TenantFactory::new(db, company.id)
        .email(None)
        .build()
        .await?;
    let other_property = factory::create_property(db, company.id, property.owner_id).await?;
    factory::contract::ContractFactory::new(db, company.id, other_property.id, silent.id)
        .start_date(date(2024, 1, 1))
        .payment_day(10)
        .build()
        .await?;

    let email = email();
    let service = WorkflowService::new(db, &email, retention());

    let run = service.run_at(now()).await;
    assert_eq!(run.processed(WorkflowStep::RentDueReminders), 1);

    let again = service.run_at(now()).await;
    assert_eq!(again.processed(WorkflowStep::RentDueReminders), 0);

    let next_month = service.run_at(now() + TimeDelta::days(31)).await;
    assert_eq!(next_month.processed(WorkflowStep::RentDueReminders), 1);

    Ok(())
}
