use super::*;

/// Tests creating a property and updating it to another owner.
///
/// Expected: Ok with the new owner and rent after the update
#[tokio::test]
async fn creates_and_updates_property() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let first = factory::create_owner(db, company.id).await?;
    let second = factory::create_owner(db, company.id).await?;

    let mut params = PropertyParams {
        company_id: company.id,
        owner_id: first.id,
        name: "Garden Flat".to_string(),
        address: "Main Street 5".to_string(),
        city: "Hamburg".to_string(),
        postal_code: Some("20095".to_string()),
        property_type: "apartment".to_string(),
        monthly_rent_cents: 95_000,
        notes: None,
    };

    let repo = PropertyRepository::new(db);
    let property = repo.create(params.clone()).await?;
    assert_eq!(property.owner_id, first.id);

    params.owner_id = second.id;
    params.monthly_rent_cents = 99_000;
    let updated = repo.update(property.id, params).await?.unwrap();

    assert_eq!(updated.owner_id, second.id);
    assert_eq!(updated.monthly_rent_cents, 99_000);
    assert_eq!(repo.count_by_owner(first.id).await?, 0);

    Ok(())
}
