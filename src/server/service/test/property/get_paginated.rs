use super::*;

/// Tests that owners only see their own properties.
///
/// Expected: owner scope lists one of two properties, other company sees none
#[tokio::test]
async fn owner_sees_own_properties() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, owner, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let other_owner = factory::create_owner(db, company.id).await?;
    factory::create_property(db, company.id, other_owner.id).await?;
    let other_company = factory::create_company(db).await?;

    let owner_user = as_user(
        factory::user::UserFactory::new(db, company.id)
            .role("owner")
            .owner_id(Some(owner.id))
            .build()
            .await?,
    );

    let service = PropertyService::new(db);

    let staff = service
        .get_paginated(&Scope::company(company.id), PropertyFilter::default(), 0, 10)
        .await?;
    assert_eq!(staff.total, 2);

    let own = service
        .get_paginated(&Scope::for_user(&owner_user), PropertyFilter::default(), 0, 10)
        .await?;
    assert_eq!(own.total, 1);
    assert_eq!(own.items[0].id, property.id);

    let foreign = service
        .get_paginated(
            &Scope::company(other_company.id),
            PropertyFilter::default(),
            0,
            10,
        )
        .await?;
    assert_eq!(foreign.total, 0);

    Ok(())
}
