use super::*;

/// Tests accepting an offer.
///
/// Expected: status accepted with decided_at stamped
#[tokio::test]
async fn accepting_stamps_decided_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) = factory::helpers::create_property_with_dependencies(db).await?;
    let offer = factory::create_offer(db, company.id, property.id).await?;

    let repo = OfferRepository::new(db);

    let sent = repo
        .set_status(company.id, offer.id, OfferStatus::Sent)
        .await?
        .unwrap();
    assert!(sent.decided_at.is_none());

    let accepted = repo
        .set_status(company.id, offer.id, OfferStatus::Accepted)
        .await?
        .unwrap();
    assert_eq!(accepted.status, OfferStatus::Accepted);
    assert!(accepted.decided_at.is_some());

    Ok(())
}
