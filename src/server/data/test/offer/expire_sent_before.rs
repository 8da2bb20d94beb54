use super::*;

/// Tests expiring sent offers past their validity.
///
/// Expected: only the overdue sent offer expires
#[tokio::test]
async fn expires_overdue_sent_offers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) = factory::helpers::create_property_with_dependencies(db).await?;
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let yesterday = today - Duration::days(1);

    let overdue = factory::offer::OfferFactory::new(db, company.id)
        .property_id(Some(property.id))
        .status("sent")
        .valid_until(Some(yesterday))
        .build()
        .await?;
    let current = factory::offer::OfferFactory::new(db, company.id)
        .property_id(Some(property.id))
        .status("sent")
        .valid_until(Some(today))
        .build()
        .await?;
    let draft = factory::offer::OfferFactory::new(db, company.id)
        .property_id(Some(property.id))
        .valid_until(Some(yesterday))
        .build()
        .await?;

    let repo = OfferRepository::new(db);
    let expired = repo.expire_sent_before(today).await?;

    assert_eq!(expired, 1);
    let scope = Scope::company(company.id);
    let status = |offer: Option<crate::server::model::offer::Offer>| offer.map(|o| o.status);
    assert_eq!(
        status(repo.find_by_id(&scope, overdue.id).await?),
        Some(OfferStatus::Expired)
    );
    assert_eq!(
        status(repo.find_by_id(&scope, current.id).await?),
        Some(OfferStatus::Sent)
    );
    assert_eq!(
        status(repo.find_by_id(&scope, draft.id).await?),
        Some(OfferStatus::Draft)
    );

    Ok(())
}
