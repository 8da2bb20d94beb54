use super::*;

/// Tests creating a contract.
///
/// Expected: Ok with typed status and dates
#[tokio::test]
async fn creates_contract() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) = factory::helpers::create_property_with_dependencies(db).await?;
    let tenant = factory::create_tenant(db, company.id).await?;

    let contract = ContractRepository::new(db)
        .create(ContractParams {
            company_id: company.id,
            property_id: property.id,
            tenant_id: tenant.id,
            start_date: date(2025, 1, 1),
            end_date: Some(date(2025, 12, 31)),
            monthly_rent_cents: 120_000,
            deposit_cents: 360_000,
            payment_day: 3,
            status: ContractStatus::Draft,
            notes: None,
        })
        .await?;

    assert_eq!(contract.status, ContractStatus::Draft);
    assert_eq!(contract.end_date, Some(date(2025, 12, 31)));
    assert_eq!(contract.payment_day, 3);

    Ok(())
}
