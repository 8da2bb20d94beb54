use super::*;

/// Tests that sent offers past their validity expire.
///
/// Expected: only the overdue sent offer becomes expired
#[tokio::test]
async fn expires_overdue_sent_offers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let overdue = factory::offer::OfferFactory::new(db, company.id)
        .property_id(Some(property.id))
        .status("sent")
        .valid_until(Some(date(2025, 5, 9)))
        .build()
        .await?;
    let valid_today = factory::offer::OfferFactory::new(db, company.id)
        .property_id(Some(property.id))
        .status("sent")
        .valid_until(Some(date(2025, 5, 10)))
        .build()
        .await?;
    let draft = factory::offer::OfferFactory::new(db, company.id)
        .property_id(Some(property.id))
        .valid_until(Some(date(2025, 1, 1)))
        .build()
        .await?;

    let email = email();
    let run = WorkflowService::new(db, &email, retention())
        .run_at(now())
        .await;
    assert_eq!(run.processed(WorkflowStep::ExpireOffers), 1);

    let repo = OfferRepository::new(db);
    let scope = Scope::company(company.id);
    let status = |offer: Option<crate::server::model::offer::Offer>| offer.map(|o| o.status);

    assert_eq!(
        status(repo.find_by_id(&scope, overdue.id).await?),
        Some(OfferStatus::Expired)
    );
    assert_eq!(
        status(repo.find_by_id(&scope, valid_today.id).await?),
        Some(OfferStatus::Sent)
    );
    assert_eq!(
        status(repo.find_by_id(&scope, draft.id).await?),
        Some(OfferStatus::Draft)
    );

    Ok(())
}

/// Tests that idle rate limit counters are purged.
///
/// Expected: the counter is removed once older than the retention
#[tokio::test]
async fn purges_idle_rate_limits() -> Result<(), AppError> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RateLimitRepository::new(db);
    repo.save("login:a@example.com:127.0.0.1", WindowState::fresh(Utc::now()))
        .await?;

    let email = email();
    let service = WorkflowService::new(db, &email, retention());

    let run = service.run_at(Utc::now()).await;
    assert_eq!(run.processed(WorkflowStep::PurgeRateLimits), 0);

    let later = service.run_at(Utc::now() + TimeDelta::hours(2)).await;
    assert_eq!(later.processed(WorkflowStep::PurgeRateLimits), 1);
    assert!(repo.get("login:a@example.com:127.0.0.1").await?.is_none());

    Ok(())
}
