use super::*;

/// Tests updating the company settings.
///
/// Expected: Ok(Some) with the new fee and contact data
#[tokio::test]
async fn updates_fee_and_contact() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Company).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;

    let updated = CompanyRepository::new(db)
        .update(UpdateCompanyParams {
            id: company.id,
            name: "Renamed".to_string(),
            email: "new@example.com".to_string(),
            phone: Some("+49 30 1".to_string()),
            address: None,
            management_fee_bps: 750,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.management_fee_bps, 750);
    assert_eq!(updated.slug, company.slug);

    Ok(())
}

/// Tests updating a missing company.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Company).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CompanyRepository::new(db)
        .update(UpdateCompanyParams {
            id: 42,
            name: "Nobody".to_string(),
            email: "nobody@example.com".to_string(),
            phone: None,
            address: None,
            management_fee_bps: 0,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
