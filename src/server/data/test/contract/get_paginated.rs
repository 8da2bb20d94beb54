use super::*;

/// Tests contract visibility for owners and tenants.
///
/// Expected: each profile sees only the contracts related to them
#[tokio::test]
async fn scopes_by_owner_and_tenant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, owner, tenant, _, contract) =
        factory::helpers::create_contract_with_dependencies(db).await?;
    let other_owner = factory::create_owner(db, company.id).await?;
    let other_tenant = factory::create_tenant(db, company.id).await?;
    let other_property = factory::create_property(db, company.id, other_owner.id).await?;
    factory::create_contract(db, company.id, other_property.id, other_tenant.id).await?;

    let repo = ContractRepository::new(db);
    let owner_scope = Scope {
        company_id: company.id,
        visibility: Visibility::Owner(owner.id),
    };
    let tenant_scope = Scope {
        company_id: company.id,
        visibility: Visibility::Tenant(tenant.id),
    };

    let (owned, owned_total) = repo
        .get_paginated(&owner_scope, ContractFilter::default(), 0, 10)
        .await?;
    let (rented, _) = repo
        .get_paginated(&tenant_scope, ContractFilter::default(), 0, 10)
        .await?;
    let (all, all_total) = repo
        .get_paginated(&Scope::company(company.id), ContractFilter::default(), 0, 10)
        .await?;

    assert_eq!(owned_total, 1);
    assert_eq!(owned[0].id, contract.id);
    assert_eq!(rented.len(), 1);
    assert_eq!(rented[0].id, contract.id);
    assert_eq!(all_total, 2);
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests filtering contracts by status.
///
/// Expected: Ok with only the terminated contract
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, tenant, property, _) =
        factory::helpers::create_contract_with_dependencies(db).await?;
    let terminated =
        factory::contract::ContractFactory::new(db, company.id, property.id, tenant.id)
            .status("terminated")
            .build()
            .await?;

    let filter = ContractFilter {
        status: Some(ContractStatus::Terminated),
        ..Default::default()
    };
    let (contracts, total) = ContractRepository::new(db)
        .get_paginated(&Scope::company(company.id), filter, 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(contracts[0].id, terminated.id);

    Ok(())
}
