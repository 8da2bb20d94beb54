use super::*;

/// Tests creating a manager account.
///
/// Expected: Ok(user) in the given company with the role applied
#[tokio::test]
async fn creates_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;

    let user = UserService::new(db)
        .create(company.id, create_dto("Mia@Example.com", UserRole::Manager))
        .await?;

    assert_eq!(user.company_id, company.id);
    assert_eq!(user.role, UserRole::Manager);
    assert_eq!(user.email, "mia@example.com");
    assert!(user.active);

    Ok(())
}

/// Tests that a second account with the same email is refused.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    factory::user::UserFactory::new(db, company.id)
        .email("taken@example.com")
        .build()
        .await?;

    let result = UserService::new(db)
        .create(company.id, create_dto("taken@example.com", UserRole::Manager))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that tenant accounts must link to a tenant of the same company.
///
/// Expected: Err(BadRequest) without a link or with a foreign tenant, Ok with own
#[tokio::test]
async fn requires_profile_of_own_company() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let other = factory::create_company(db).await?;
    let own_tenant = factory::create_tenant(db, company.id).await?;
    let foreign_tenant = factory::create_tenant(db, other.id).await?;

    let service = UserService::new(db);

    let unlinked = service
        .create(company.id, create_dto("t1@example.com", UserRole::Tenant))
        .await;
    assert!(matches!(unlinked, Err(AppError::BadRequest(_))));

    let mut dto = create_dto("t2@example.com", UserRole::Tenant);
    dto.tenant_id = Some(foreign_tenant.id);
    let foreign = service.create(company.id, dto).await;
    assert!(matches!(foreign, Err(AppError::BadRequest(_))));

    let mut dto = create_dto("t3@example.com", UserRole::Tenant);
    dto.tenant_id = Some(own_tenant.id);
    // Links that do not match the role are dropped
    dto.owner_id = Some(12345);
    let user = service.create(company.id, dto).await?;
    assert_eq!(user.tenant_id, Some(own_tenant.id));
    assert_eq!(user.owner_id, None);

    Ok(())
}
