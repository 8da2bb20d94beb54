use super::*;

/// Tests that providers only see issues assigned to them.
///
/// Expected: Ok with the assigned issue only
#[tokio::test]
async fn provider_sees_assigned_issues() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) = factory::helpers::create_property_with_dependencies(db).await?;
    let provider = factory::create_provider(db, company.id).await?;
    let assigned = factory::issue::IssueFactory::new(db, company.id, property.id)
        .provider_id(Some(provider.id))
        .build()
        .await?;
    factory::create_issue(db, company.id, property.id).await?;

    let scope = Scope {
        company_id: company.id,
        visibility: Visibility::Provider(provider.id),
    };
    let (issues, total) = IssueRepository::new(db)
        .get_paginated(&scope, IssueFilter::default(), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(issues[0].id, assigned.id);

    Ok(())
}

/// Tests filtering by priority and counting open issues.
///
/// Expected: one urgent issue; two issues counted as open
#[tokio::test]
async fn filters_by_priority_and_counts_open() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) = factory::helpers::create_property_with_dependencies(db).await?;
    let urgent = factory::issue::IssueFactory::new(db, company.id, property.id)
        .priority("urgent")
        .status("in_progress")
        .build()
        .await?;
    factory::create_issue(db, company.id, property.id).await?;
    factory::issue::IssueFactory::new(db, company.id, property.id)
        .status("closed")
        .build()
        .await?;

    let repo = IssueRepository::new(db);
    let scope = Scope::company(company.id);
    let filter = IssueFilter {
        priority: Some(IssuePriority::Urgent),
        ..Default::default()
    };

    let (issues, _) = repo.get_paginated(&scope, filter, 0, 10).await?;

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].id, urgent.id);
    assert_eq!(repo.count_open(&scope).await?, 2);

    Ok(())
}
