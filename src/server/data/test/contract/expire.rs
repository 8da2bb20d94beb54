use super::*;

/// Tests expiring contracts by id.
///
/// Only active contracts change; terminated ones keep their status.
///
/// Expected: Ok(1)
#[tokio::test]
async fn expires_only_active_contracts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, tenant, property, active) =
        factory::helpers::create_contract_with_dependencies(db).await?;
    let terminated =
        factory::contract::ContractFactory::new(db, company.id, property.id, tenant.id)
            .status("terminated")
            .build()
            .await?;

    let repo = ContractRepository::new(db);
    let changed = repo.expire(&[active.id, terminated.id]).await?;

    assert_eq!(changed, 1);
    let scope = Scope::company(company.id);
    let active = repo.find_by_id(&scope, active.id).await?.unwrap();
    let terminated = repo.find_by_id(&scope, terminated.id).await?.unwrap();
    assert_eq!(active.status, ContractStatus::Expired);
    assert_eq!(terminated.status, ContractStatus::Terminated);

    assert_eq!(repo.expire(&[]).await?, 0);

    Ok(())
}
