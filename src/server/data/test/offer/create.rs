use super::*;

/// Tests creating an offer for an issue.
///
/// Expected: Ok with a draft offer
#[tokio::test]
async fn creates_draft_offer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) = factory::helpers::create_property_with_dependencies(db).await?;
    let issue = factory::create_issue(db, company.id, property.id).await?;
    let provider = factory::create_provider(db, company.id).await?;

    let offer = OfferRepository::new(db)
        .create(OfferParams {
            company_id: company.id,
            issue_id: Some(issue.id),
            property_id: Some(property.id),
            provider_id: Some(provider.id),
            title: "Replace tap".to_string(),
            description: None,
            amount_cents: 18_000,
            valid_until: NaiveDate::from_ymd_opt(2025, 7, 1),
        })
        .await?;

    assert_eq!(offer.status, OfferStatus::Draft);
    assert_eq!(offer.issue_id, Some(issue.id));
    assert!(offer.decided_at.is_none());

    Ok(())
}
