use super::*;

/// Tests creating a user linked to a tenant profile.
///
/// Expected: Ok with an active tenant user carrying the link
#[tokio::test]
async fn creates_linked_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let tenant = factory::create_tenant(db, company.id).await?;

    let mut create = params(company.id, "tom@example.com", UserRole::Tenant);
    create.link.tenant_id = Some(tenant.id);

    let repo = UserRepository::new(db);
    let user = repo.create(create).await?;

    assert!(user.active);
    assert_eq!(user.role, UserRole::Tenant);
    assert_eq!(user.tenant_id, Some(tenant.id));
    assert!(user.last_login_at.is_none());
    assert!(repo.find_in_company(company.id, user.id).await?.is_some());

    Ok(())
}

/// Tests that emails are unique across companies.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let other = factory::create_company(db).await?;

    let repo = UserRepository::new(db);
    repo.create(params(company.id, "same@example.com", UserRole::Manager))
        .await?;
    let result = repo
        .create(params(other.id, "same@example.com", UserRole::Manager))
        .await;

    assert!(result.is_err());
    assert!(repo.email_exists("SAME@example.com").await?);

    Ok(())
}
