use super::*;

/// Tests paginating owners.
///
/// Verifies ordering by name, page sizes and the total count.
///
/// Expected: Ok with 2 owners on page 0, 1 on page 1, total 3
#[tokio::test]
async fn paginates_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let repo = OwnerRepository::new(db);
    for name in ["Carla", "Alice", "Bruno"] {
        repo.create(params(company.id, name)).await?;
    }

    let (first, total) = repo.get_paginated(company.id, None, 0, 2).await?;
    let (second, _) = repo.get_paginated(company.id, None, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first.iter().map(|o| o.name.as_str()).collect::<Vec<_>>(),
        vec!["Alice", "Bruno"]
    );
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Carla");

    Ok(())
}

/// Tests searching owners.
///
/// Expected: Ok with only the owner whose name matches
#[tokio::test]
async fn filters_by_search_term() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let repo = OwnerRepository::new(db);
    repo.create(params(company.id, "Alice")).await?;
    repo.create(params(company.id, "Bruno")).await?;

    let (owners, total) = repo
        .get_paginated(company.id, Some("Bru".to_string()), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(owners[0].name, "Bruno");

    Ok(())
}

/// Tests that other companies' owners are never listed.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn excludes_other_companies() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let other = factory::create_company(db).await?;
    factory::create_owner(db, other.id).await?;

    let (owners, total) = OwnerRepository::new(db)
        .get_paginated(company.id, None, 0, 10)
        .await?;

    assert!(owners.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
