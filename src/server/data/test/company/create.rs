use super::*;

/// Tests creating a company.
///
/// Expected: Ok with a zero management fee and the slug registered
#[tokio::test]
async fn creates_company_without_fee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Company).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CompanyRepository::new(db);
    let company = repo
        .create(CreateCompanyParams {
            name: "Acme Estates".to_string(),
            slug: "acme-estates".to_string(),
            email: "office@acme.test".to_string(),
        })
        .await?;

    assert_eq!(company.management_fee_bps, 0);
    assert!(repo.slug_exists("acme-estates").await?);
    assert!(!repo.slug_exists("other").await?);

    Ok(())
}

/// Tests that slugs are unique.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Company).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CompanyRepository::new(db);
    let params = CreateCompanyParams {
        name: "Acme".to_string(),
        slug: "acme".to_string(),
        email: "office@acme.test".to_string(),
    };

    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(result.is_err());

    Ok(())
}
