use super::*;

/// Tests that a property with contracts cannot be deleted.
///
/// Expected: Err(BadRequest) with a contract, Ok once it is gone
#[tokio::test]
async fn refuses_property_with_contracts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, _, property, contract) =
        factory::helpers::create_contract_with_dependencies(db).await?;

    let service = PropertyService::new(db);

    let result = service.delete(company.id, property.id).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    crate::server::service::contract::ContractService::new(db)
        .delete(company.id, contract.id)
        .await?;

    service.delete(company.id, property.id).await?;
    assert!(matches!(
        service
            .get_by_id(&Scope::company(company.id), property.id)
            .await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
