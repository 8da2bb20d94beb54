use super::*;

/// Tests the draft, sent, accepted path.
///
/// Expected: each step succeeds, accepted offers get decided_at
#[tokio::test]
async fn sends_and_accepts_offer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let offer = factory::create_offer(db, company.id, property.id).await?;

    let service = OfferService::new(db);

    let sent = service.send(company.id, offer.id).await?;
    assert_eq!(sent.status, OfferStatus::Sent);
    assert!(sent.decided_at.is_none());

    let accepted = service.accept(company.id, offer.id).await?;
    assert_eq!(accepted.status, OfferStatus::Accepted);
    assert!(accepted.decided_at.is_some());

    Ok(())
}

/// Tests that decided offers are final.
///
/// Expected: accept, reject, send and update all refused with BadRequest
#[tokio::test]
async fn decided_offer_is_final() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let offer = factory::create_offer(db, company.id, property.id).await?;

    let service = OfferService::new(db);
    service.reject(company.id, offer.id).await?;

    assert!(matches!(
        service.accept(company.id, offer.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.send(company.id, offer.id).await,
        Err(AppError::BadRequest(_))
    ));

    let mut update = params(None, Some(property.id));
    update.company_id = company.id;
    assert!(matches!(
        service.update(offer.id, update).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests that an offer of another company cannot be decided.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn hides_foreign_offer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let other = factory::create_company(db).await?;
    let offer = factory::create_offer(db, company.id, property.id).await?;

    let result = OfferService::new(db).accept(other.id, offer.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
