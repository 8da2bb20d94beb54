use super::*;

/// Company with two owners:
/// - "Zed" owns "Alpha" with an open-ended contract from 2024-03-15 at 1000.00
///   and an offer of 250.00 accepted in June 2024
/// - "Amy" owns "Beta" with a January-only contract at 500.00 and a draft
struct Fixture {
    company_id: i32,
    zed_id: i32,
    amy_id: i32,
    alpha_id: i32,
    beta_id: i32,
}

async fn fixture(db: &sea_orm::DatabaseConnection) -> Result<Fixture, AppError> {
    let company = factory::company::CompanyFactory::new(db)
        .management_fee_bps(1000)
        .build()
        .await?;
    let zed = factory::owner::OwnerFactory::new(db, company.id)
        .name("Zed")
        .build()
        .await?;
    let amy = factory::owner::OwnerFactory::new(db, company.id)
        .name("Amy")
        .build()
        .await?;
    let alpha = factory::property::PropertyFactory::new(db, company.id, zed.id)
        .name("Alpha")
        .build()
        .await?;
    let beta = factory::property::PropertyFactory::new(db, company.id, amy.id)
        .name("Beta")
        .build()
        .await?;
    let tenant = factory::create_tenant(db, company.id).await?;

    factory::contract::ContractFactory::new(db, company.id, alpha.id, tenant.id)
        .start_date(date(2024, 3, 15))
        .monthly_rent_cents(100_000)
        .build()
        .await?;
    factory::contract::ContractFactory::new(db, company.id, beta.id, tenant.id)
        .start_date(date(2024, 1, 1))
        .end_date(Some(date(2024, 1, 31)))
        .monthly_rent_cents(50_000)
        .status("terminated")
        .build()
        .await?;
    factory::contract::ContractFactory::new(db, company.id, beta.id, tenant.id)
        .start_date(date(2024, 1, 1))
        .monthly_rent_cents(99_999)
        .status("draft")
        .build()
        .await?;

    let decided = Utc.from_utc_datetime(&date(2024, 6, 10).and_time(NaiveTime::MIN));
    factory::offer::OfferFactory::new(db, company.id)
        .property_id(Some(alpha.id))
        .amount_cents(25_000)
        .status("accepted")
        .decided_at(Some(decided))
        .build()
        .await?;
    // Rejected offers are not expenses
    factory::offer::OfferFactory::new(db, company.id)
        .property_id(Some(alpha.id))
        .amount_cents(70_000)
        .status("rejected")
        .decided_at(Some(decided))
        .build()
        .await?;

    Ok(Fixture {
        company_id: company.id,
        zed_id: zed.id,
        amy_id: amy.id,
        alpha_id: alpha.id,
        beta_id: beta.id,
    })
}

/// Tests the yearly report arithmetic.
///
/// Expected: income by months in force, 10% fee, accepted offers as expenses
#[tokio::test]
async fn computes_yearly_report() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let f = fixture(db).await?;

    let report = ReportService::new(db)
        .financial(&Scope::company(f.company_id), 2024, None, None)
        .await?;

    assert_eq!(report.management_fee_bps, 1000);
    assert_eq!(report.properties.len(), 2);

    let alpha = &report.properties[0];
    assert_eq!(alpha.property_id, f.alpha_id);
    assert_eq!(alpha.financials.income_cents, 1_000_000);
    assert_eq!(alpha.financials.management_fee_cents, 100_000);
    assert_eq!(alpha.financials.expenses_cents, 25_000);
    assert_eq!(alpha.financials.net_cents(), 875_000);

    let beta = &report.properties[1];
    assert_eq!(beta.property_id, f.beta_id);
    assert_eq!(beta.financials.income_cents, 50_000);
    assert_eq!(beta.financials.management_fee_cents, 5_000);

    assert_eq!(report.totals.income_cents, 1_050_000);
    assert_eq!(report.totals.management_fee_cents, 105_000);
    assert_eq!(report.totals.expenses_cents, 25_000);
    assert_eq!(report.totals.net_cents(), 920_000);

    let owners: Vec<_> = report.owners.iter().map(|o| o.owner_id).collect();
    assert_eq!(owners, vec![f.amy_id, f.zed_id]);

    Ok(())
}

/// Tests a single month report.
///
/// Expected: March only counts the Alpha contract and no expenses
#[tokio::test]
async fn computes_monthly_report() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let f = fixture(db).await?;

    let report = ReportService::new(db)
        .financial(&Scope::company(f.company_id), 2024, Some(3), None)
        .await?;

    assert_eq!(report.totals.income_cents, 100_000);
    assert_eq!(report.totals.expenses_cents, 0);

    Ok(())
}

/// Tests that owners only get their own figures.
///
/// Expected: the owner filter is forced to the owner's profile
#[tokio::test]
async fn owner_report_is_restricted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let f = fixture(db).await?;

    let owner_user = as_user(
        factory::user::UserFactory::new(db, f.company_id)
            .role("owner")
            .owner_id(Some(f.zed_id))
            .build()
            .await?,
    );

    let report = ReportService::new(db)
        .financial(&Scope::for_user(&owner_user), 2024, None, Some(f.amy_id))
        .await?;

    assert_eq!(report.properties.len(), 1);
    assert_eq!(report.properties[0].property_id, f.alpha_id);
    assert_eq!(report.owners.len(), 1);
    assert_eq!(report.owners[0].owner_id, f.zed_id);
    assert_eq!(report.totals.income_cents, 1_000_000);

    Ok(())
}

/// Tests that an impossible month is refused.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_invalid_month() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let company = factory::create_company(db).await?;

    let result = ReportService::new(db)
        .financial(&Scope::company(company.id), 2024, Some(13), None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that owner and total fees are charged on the summed income.
///
/// Expected: two properties at 10.15 with a 5% fee give 0.50 each but 1.01 in total
#[tokio::test]
async fn owner_fee_uses_summed_income() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::CompanyFactory::new(db)
        .management_fee_bps(500)
        .build()
        .await?;
    let owner = factory::create_owner(db, company.id).await?;
    let tenant = factory::create_tenant(db, company.id).await?;
    for _ in 0..2 {
        let property = factory::create_property(db, company.id, owner.id).await?;
        factory::contract::ContractFactory::new(db, company.id, property.id, tenant.id)
            .start_date(date(2025, 1, 1))
            .monthly_rent_cents(1_015)
            .build()
            .await?;
    }

    let report = ReportService::new(db)
        .financial(&Scope::company(company.id), 2025, Some(1), None)
        .await?;

    assert!(report
        .properties
        .iter()
        .all(|p| p.financials.management_fee_cents == 50));

    let owner_row = &report.owners[0];
    assert_eq!(owner_row.financials.income_cents, 2_030);
    assert_eq!(owner_row.financials.management_fee_cents, 101);
    assert_eq!(owner_row.financials.net_cents(), 1_929);
    assert_eq!(report.totals.management_fee_cents, 101);

    Ok(())
}
