use super::*;

/// Tests resolving and reopening an issue.
///
/// Expected: resolved_at set on resolve, cleared on reopen
#[tokio::test]
async fn stamps_and_clears_resolved_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) = factory::helpers::create_property_with_dependencies(db).await?;
    let issue = factory::create_issue(db, company.id, property.id).await?;

    let repo = IssueRepository::new(db);

    let resolved = repo
        .set_status(company.id, issue.id, IssueStatus::Resolved)
        .await?
        .unwrap();
    assert_eq!(resolved.status, IssueStatus::Resolved);
    assert!(resolved.resolved_at.is_some());

    let closed = repo
        .set_status(company.id, issue.id, IssueStatus::Closed)
        .await?
        .unwrap();
    assert_eq!(closed.resolved_at, resolved.resolved_at);

    let reopened = repo
        .set_status(company.id, issue.id, IssueStatus::InProgress)
        .await?
        .unwrap();
    assert!(reopened.resolved_at.is_none());

    Ok(())
}
