use super::*;

/// Tests finding the active contract of a property.
///
/// Expected: the active contract, or None when it is the excluded one
#[tokio::test]
async fn finds_active_contract_except_excluded() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, tenant, property, contract) =
        factory::helpers::create_contract_with_dependencies(db).await?;
    factory::contract::ContractFactory::new(db, company.id, property.id, tenant.id)
        .status("expired")
        .build()
        .await?;

    let repo = ContractRepository::new(db);

    let found = repo.find_active_for_property(property.id, None).await?;
    assert_eq!(found.map(|c| c.id), Some(contract.id));

    let found = repo
        .find_active_for_property(property.id, Some(contract.id))
        .await?;
    assert!(found.is_none());

    assert!(repo.tenant_has_active_contract(tenant.id, property.id).await?);

    Ok(())
}
