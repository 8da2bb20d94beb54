use super::*;

/// Tests the staff dashboard counts.
///
/// Expected: every counter reflects the company's records
#[tokio::test]
async fn counts_company_records() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, tenant, property, _) =
        factory::helpers::create_contract_with_dependencies(db).await?;
    let today = Utc::now().date_naive();
    let owner = factory::create_owner(db, company.id).await?;
    let second = factory::create_property(db, company.id, owner.id).await?;
    factory::contract::ContractFactory::new(db, company.id, second.id, tenant.id)
        .end_date(today.succ_opt())
        .build()
        .await?;
    factory::create_issue(db, company.id, property.id).await?;
    factory::issue::IssueFactory::new(db, company.id, property.id)
        .status("closed")
        .build()
        .await?;
    factory::create_offer(db, company.id, property.id).await?;

    // Records of another company never count
    factory::helpers::create_contract_with_dependencies(db).await?;

    let dashboard = ReportService::new(db)
        .dashboard(&Scope::company(company.id))
        .await?;

    assert_eq!(dashboard.properties, 2);
    assert_eq!(dashboard.owners, 2);
    assert_eq!(dashboard.tenants, 1);
    assert_eq!(dashboard.active_contracts, 2);
    assert_eq!(dashboard.expiring_contracts, 1);
    assert_eq!(dashboard.open_issues, 1);
    assert_eq!(dashboard.pending_offers, 1);

    Ok(())
}

/// Tests that tenants get no company-wide people counts.
///
/// Expected: owners and tenants are 0, own contract counted
#[tokio::test]
async fn tenant_dashboard_is_scoped() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, tenant, _, _) =
        factory::helpers::create_contract_with_dependencies(db).await?;
    factory::create_tenant(db, company.id).await?;

    let user = as_user(
        factory::user::UserFactory::new(db, company.id)
            .role("tenant")
            .tenant_id(Some(tenant.id))
            .build()
            .await?,
    );

    let dashboard = ReportService::new(db)
        .dashboard(&Scope::for_user(&user))
        .await?;

    assert_eq!(dashboard.owners, 0);
    assert_eq!(dashboard.tenants, 0);
    assert_eq!(dashboard.active_contracts, 1);

    Ok(())
}

/// Tests that an active contract past its end date is not counted as expiring.
///
/// Expected: counted as active until the workflow expires it, never as expiring
#[tokio::test]
async fn overdue_contract_is_not_expiring() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let owner = factory::create_owner(db, company.id).await?;
    let tenant = factory::create_tenant(db, company.id).await?;
    let property = factory::create_property(db, company.id, owner.id).await?;
    let today = Utc::now().date_naive();
    factory::contract::ContractFactory::new(db, company.id, property.id, tenant.id)
        .end_date(today.pred_opt())
        .build()
        .await?;

    let dashboard = ReportService::new(db)
        .dashboard(&Scope::company(company.id))
        .await?;

    assert_eq!(dashboard.active_contracts, 1);
    assert_eq!(dashboard.expiring_contracts, 0);

    Ok(())
}
