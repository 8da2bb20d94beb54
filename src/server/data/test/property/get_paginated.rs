use super::*;

/// Tests filtering properties by city and search term.
///
/// Expected: Ok with only the matching property
#[tokio::test]
async fn filters_by_city_and_search() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let owner = factory::create_owner(db, company.id).await?;
    factory::property::PropertyFactory::new(db, company.id, owner.id)
        .name("Loft")
        .city("Munich")
        .build()
        .await?;
    factory::property::PropertyFactory::new(db, company.id, owner.id)
        .name("Loft Annex")
        .build()
        .await?;
    factory::property::PropertyFactory::new(db, company.id, owner.id)
        .name("Villa")
        .city("Munich")
        .build()
        .await?;

    let filter = PropertyFilter {
        search: Some("Loft".to_string()),
        owner_id: None,
        city: Some("Munich".to_string()),
    };
    let (properties, total) = PropertyRepository::new(db)
        .get_paginated(&Scope::company(company.id), filter, 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(properties[0].name, "Loft");

    Ok(())
}

/// Tests that an unlinked profile scope lists nothing.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn nothing_scope_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, _) = factory::helpers::create_property_with_dependencies(db).await?;
    let scope = Scope {
        company_id: company.id,
        visibility: Visibility::Nothing,
    };

    let (properties, total) = PropertyRepository::new(db)
        .get_paginated(&scope, PropertyFilter::default(), 0, 10)
        .await?;

    assert!(properties.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
