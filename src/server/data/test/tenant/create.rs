use super::*;

/// Tests creating a tenant and reading it back.
///
/// Expected: Ok with the stored fields
#[tokio::test]
async fn creates_tenant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let repo = TenantRepository::new(db);

    let tenant = repo.create(params(company.id, "Tom")).await?;
    let found = repo.find_by_id(company.id, tenant.id).await?.unwrap();

    assert_eq!(found.id, tenant.id);
    assert_eq!(found.name, "Tom");
    assert_eq!(tenant.phone.as_deref(), Some("+49 40 5555"));
    assert_eq!(repo.count(company.id).await?, 1);

    Ok(())
}
