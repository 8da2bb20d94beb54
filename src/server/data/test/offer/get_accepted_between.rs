use super::*;

/// Tests selecting accepted offers decided within a period.
///
/// Expected: only the offer accepted inside the period
#[tokio::test]
async fn selects_offers_accepted_in_period() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) = factory::helpers::create_property_with_dependencies(db).await?;
    let now = Utc::now();

    let inside = factory::offer::OfferFactory::new(db, company.id)
        .property_id(Some(property.id))
        .status("accepted")
        .decided_at(Some(now - Duration::days(1)))
        .build()
        .await?;
    factory::offer::OfferFactory::new(db, company.id)
        .property_id(Some(property.id))
        .status("accepted")
        .decided_at(Some(now - Duration::days(40)))
        .build()
        .await?;
    factory::offer::OfferFactory::new(db, company.id)
        .property_id(Some(property.id))
        .status("rejected")
        .decided_at(Some(now - Duration::days(1)))
        .build()
        .await?;

    let offers = OfferRepository::new(db)
        .get_accepted_between(company.id, now - Duration::days(30), now)
        .await?;

    assert_eq!(offers.iter().map(|o| o.id).collect::<Vec<_>>(), vec![inside.id]);

    Ok(())
}
