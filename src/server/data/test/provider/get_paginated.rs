use super::*;

/// Tests searching providers by service type.
///
/// Expected: Ok with the electrician only
#[tokio::test]
async fn matches_service_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let repo = ProviderRepository::new(db);
    repo.create(ProviderParams {
        company_id: company.id,
        name: "Sparky GmbH".to_string(),
        email: None,
        phone: None,
        service_type: Some("electrical".to_string()),
        notes: None,
    })
    .await?;
    factory::create_provider(db, company.id).await?;

    let (providers, total) = repo
        .get_paginated(company.id, Some("electric".to_string()), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(providers[0].name, "Sparky GmbH");

    Ok(())
}
