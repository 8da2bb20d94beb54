use super::*;

/// Tests owner visibility of properties.
///
/// Expected: the owner sees their property but not another owner's
#[tokio::test]
async fn owner_sees_only_own_properties() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, owner, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let other_owner = factory::create_owner(db, company.id).await?;
    let other_property = factory::create_property(db, company.id, other_owner.id).await?;

    let scope = Scope {
        company_id: company.id,
        visibility: Visibility::Owner(owner.id),
    };
    let repo = PropertyRepository::new(db);

    assert!(repo.find_by_id(&scope, property.id).await?.is_some());
    assert!(repo.find_by_id(&scope, other_property.id).await?.is_none());

    Ok(())
}

/// Tests tenant visibility of properties.
///
/// Expected: the tenant sees the property they rent
#[tokio::test]
async fn tenant_sees_rented_property() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, owner, tenant, property, _) =
        factory::helpers::create_contract_with_dependencies(db).await?;
    let vacant = factory::create_property(db, company.id, owner.id).await?;

    let scope = Scope {
        company_id: company.id,
        visibility: Visibility::Tenant(tenant.id),
    };
    let repo = PropertyRepository::new(db);

    assert!(repo.find_by_id(&scope, property.id).await?.is_some());
    assert!(repo.find_by_id(&scope, vacant.id).await?.is_none());

    Ok(())
}

/// Tests that providers and other companies see no properties.
///
/// Expected: Ok(None) for both scopes
#[tokio::test]
async fn hides_from_providers_and_other_companies() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) = factory::helpers::create_property_with_dependencies(db).await?;
    let other = factory::create_company(db).await?;
    let provider = factory::create_provider(db, company.id).await?;

    let repo = PropertyRepository::new(db);
    let provider_scope = Scope {
        company_id: company.id,
        visibility: Visibility::Provider(provider.id),
    };

    assert!(repo.find_by_id(&provider_scope, property.id).await?.is_none());
    assert!(repo
        .find_by_id(&Scope::company(other.id), property.id)
        .await?
        .is_none());

    Ok(())
}
