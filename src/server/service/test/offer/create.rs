use super::*;

/// Tests that the property is taken from the issue when omitted.
///
/// Expected: offer on the issue's property in draft status
#[tokio::test]
async fn fills_property_from_issue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let issue = factory::create_issue(db, company.id, property.id).await?;
    let manager = as_user(factory::create_user(db, company.id).await?);

    let offer = OfferService::new(db)
        .create(&manager, params(Some(issue.id), None))
        .await?;

    assert_eq!(offer.property_id, Some(property.id));
    assert_eq!(offer.status, OfferStatus::Draft);

    Ok(())
}

/// Tests that an offer without issue or property is refused.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn requires_a_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let manager = as_user(factory::create_user(db, company.id).await?);

    let result = OfferService::new(db)
        .create(&manager, params(None, None))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that providers quote only for issues assigned to them.
///
/// Expected: Ok for the assigned issue with the provider forced, AccessDenied otherwise
#[tokio::test]
async fn provider_quotes_assigned_issue_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let provider = factory::create_provider(db, company.id).await?;
    let colleague = factory::create_provider(db, company.id).await?;
    let assigned = factory::issue::IssueFactory::new(db, company.id, property.id)
        .provider_id(Some(provider.id))
        .build()
        .await?;
    let unassigned = factory::create_issue(db, company.id, property.id).await?;
    let user = as_user(
        factory::user::UserFactory::new(db, company.id)
            .role("provider")
            .provider_id(Some(provider.id))
            .build()
            .await?,
    );

    let service = OfferService::new(db);

    let mut own = params(Some(assigned.id), None);
    own.provider_id = Some(colleague.id);
    let offer = service.create(&user, own).await?;
    assert_eq!(offer.provider_id, Some(provider.id));

    let result = service.create(&user, params(Some(unassigned.id), None)).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let result = service.create(&user, params(None, Some(property.id))).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
