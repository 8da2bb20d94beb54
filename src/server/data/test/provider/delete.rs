use super::*;

/// Tests deleting a provider assigned to an issue.
///
/// Verifies that the issue survives with its provider cleared.
///
/// Expected: Ok(true) and issue.provider_id is None
#[tokio::test]
async fn clears_issue_assignment() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let provider = factory::create_provider(db, company.id).await?;
    let issue = factory::issue::IssueFactory::new(db, company.id, property.id)
        .provider_id(Some(provider.id))
        .build()
        .await?;

    let deleted = ProviderRepository::new(db)
        .delete(company.id, provider.id)
        .await?;

    assert!(deleted);
    let issue = entity::prelude::Issue::find_by_id(issue.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(issue.provider_id, None);

    Ok(())
}
