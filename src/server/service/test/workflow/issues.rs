use super::*;

/// Tests escalation of issues open for more than a week.
///
/// Expected: company address and active staff notified once, fresh issues ignored
#[tokio::test]
async fn escalates_stale_issues_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    factory::create_user(db, company.id).await?;
    factory::user::UserFactory::new(db, company.id)
        .active(false)
        .build()
        .await?;

    factory::issue::IssueFactory::new(db, company.id, property.id)
        .created_at(now() - TimeDelta::days(10))
        .build()
        .await?;
    factory::issue::IssueFactory::new(db, company.id, property.id)
        .created_at(now() - TimeDelta::days(2))
        .build()
        .await?;
    factory::issue::IssueFactory::new(db, company.id, property.id)
        .status("resolved")
        .created_at(now() - TimeDelta::days(30))
        .build()
        .await?;

    let email = email();
    let service = WorkflowService::new(db, &email, retention());

    let run = service.run_at(now()).await;
    assert_eq!(run.processed(WorkflowStep::StaleIssueEscalation), 2);

    let again = service.run_at(now()).await;
    assert_eq!(again.processed(WorkflowStep::StaleIssueEscalation), 0);

    Ok(())
}
