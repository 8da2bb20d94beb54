use super::*;
use chrono::{Duration, Utc};

/// Tests selecting stale open issues.
///
/// Expected: only the old issue that is still open
#[tokio::test]
async fn selects_old_open_issues() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) = factory::helpers::create_property_with_dependencies(db).await?;
    let old = Utc::now() - Duration::days(10);
    let stale = factory::issue::IssueFactory::new(db, company.id, property.id)
        .created_at(old)
        .build()
        .await?;
    factory::issue::IssueFactory::new(db, company.id, property.id)
        .created_at(old)
        .status("in_progress")
        .build()
        .await?;
    factory::create_issue(db, company.id, property.id).await?;

    let issues = IssueRepository::new(db)
        .get_open_created_before(Utc::now() - Duration::days(7))
        .await?;

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].id, stale.id);

    Ok(())
}
