use super::*;

/// Tests that a tenant with an active contract can report an issue.
///
/// Expected: open issue linked to the tenant, provider assignment dropped
#[tokio::test]
async fn tenant_reports_issue_on_rented_property() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, tenant, property, _) =
        factory::helpers::create_contract_with_dependencies(db).await?;
    let provider = factory::create_provider(db, company.id).await?;
    let user = as_user(
        factory::user::UserFactory::new(db, company.id)
            .role("tenant")
            .tenant_id(Some(tenant.id))
            .build()
            .await?,
    );

    let mut params = params(property.id);
    params.provider_id = Some(provider.id);

    let issue = IssueService::new(db).create(&user, params).await?;

    assert_eq!(issue.company_id, company.id);
    assert_eq!(issue.tenant_id, Some(tenant.id));
    assert_eq!(issue.provider_id, None);
    assert_eq!(issue.status, IssueStatus::Open);

    Ok(())
}

/// Tests that a tenant cannot report issues for a property they do not rent.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn tenant_without_contract_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, owner, tenant, _, _) =
        factory::helpers::create_contract_with_dependencies(db).await?;
    let other_property = factory::create_property(db, company.id, owner.id).await?;
    let user = as_user(
        factory::user::UserFactory::new(db, company.id)
            .role("tenant")
            .tenant_id(Some(tenant.id))
            .build()
            .await?,
    );

    let result = IssueService::new(db)
        .create(&user, params(other_property.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that owners and providers cannot report issues.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn other_roles_are_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, owner, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let user = as_user(
        factory::user::UserFactory::new(db, company.id)
            .role("owner")
            .owner_id(Some(owner.id))
            .build()
            .await?,
    );

    let result = IssueService::new(db).create(&user, params(property.id)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that staff can assign a provider but not one of another company.
///
/// Expected: Ok with own provider, Err(BadRequest) with a foreign one
#[tokio::test]
async fn staff_assigns_provider_of_own_company() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let other = factory::create_company(db).await?;
    let provider = factory::create_provider(db, company.id).await?;
    let foreign_provider = factory::create_provider(db, other.id).await?;
    let manager = as_user(factory::create_user(db, company.id).await?);

    let service = IssueService::new(db);

    let mut own = params(property.id);
    own.provider_id = Some(provider.id);
    let issue = service.create(&manager, own).await?;
    assert_eq!(issue.provider_id, Some(provider.id));

    let mut foreign = params(property.id);
    foreign.provider_id = Some(foreign_provider.id);
    let result = service.create(&manager, foreign).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
