use super::*;

/// Tests creating an issue.
///
/// Expected: Ok with status open and no resolution timestamp
#[tokio::test]
async fn creates_open_issue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, tenant, property, _) =
        factory::helpers::create_contract_with_dependencies(db).await?;

    let issue = IssueRepository::new(db)
        .create(IssueParams {
            company_id: company.id,
            property_id: property.id,
            tenant_id: Some(tenant.id),
            provider_id: None,
            title: "Leaking tap".to_string(),
            description: "Kitchen tap drips".to_string(),
            priority: IssuePriority::High,
        })
        .await?;

    assert_eq!(issue.status, IssueStatus::Open);
    assert_eq!(issue.priority, IssuePriority::High);
    assert!(issue.resolved_at.is_none());
    assert_eq!(issue.created_at, issue.updated_at);

    Ok(())
}
