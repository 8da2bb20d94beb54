use super::*;

/// Tests that tenant pages are company scoped and searchable.
///
/// Expected: Ok with the matching tenant of the own company only
#[tokio::test]
async fn searches_within_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let other = factory::create_company(db).await?;
    let repo = TenantRepository::new(db);
    repo.create(params(company.id, "Tom Tenant")).await?;
    repo.create(params(company.id, "Tina")).await?;
    repo.create(params(other.id, "Tom Elsewhere")).await?;

    let (tenants, total) = repo
        .get_paginated(company.id, Some("Tom".to_string()), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(tenants[0].name, "Tom Tenant");

    Ok(())
}
