use super::*;

/// Tests that deleting a property removes its issues.
///
/// Expected: Ok(true) and no issues left
#[tokio::test]
async fn deletes_property_with_issues() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) = factory::helpers::create_property_with_dependencies(db).await?;
    factory::create_issue(db, company.id, property.id).await?;

    let deleted = PropertyRepository::new(db)
        .delete(company.id, property.id)
        .await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Issue::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a property with contracts cannot be deleted at the database level.
///
/// Expected: Err from the restricting foreign key
#[tokio::test]
async fn refuses_property_with_contract() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, _, property, _) =
        factory::helpers::create_contract_with_dependencies(db).await?;

    let result = PropertyRepository::new(db)
        .delete(company.id, property.id)
        .await;

    assert!(result.is_err());

    Ok(())
}
