use super::*;

/// Tests offer visibility.
///
/// Expected: providers see their own offers, owners see offers on their
/// properties, tenants see none
#[tokio::test]
async fn scopes_offers_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, owner, tenant, property, _) =
        factory::helpers::create_contract_with_dependencies(db).await?;
    let provider = factory::create_provider(db, company.id).await?;
    let mine = factory::offer::OfferFactory::new(db, company.id)
        .property_id(Some(property.id))
        .provider_id(Some(provider.id))
        .build()
        .await?;
    let other_owner = factory::create_owner(db, company.id).await?;
    let other_property = factory::create_property(db, company.id, other_owner.id).await?;
    factory::create_offer(db, company.id, other_property.id).await?;

    let repo = OfferRepository::new(db);
    let scope = |visibility| Scope {
        company_id: company.id,
        visibility,
    };

    let (by_provider, _) = repo
        .get_paginated(&scope(Visibility::Provider(provider.id)), OfferFilter::default(), 0, 10)
        .await?;
    let (by_owner, _) = repo
        .get_paginated(&scope(Visibility::Owner(owner.id)), OfferFilter::default(), 0, 10)
        .await?;
    let (by_tenant, tenant_total) = repo
        .get_paginated(&scope(Visibility::Tenant(tenant.id)), OfferFilter::default(), 0, 10)
        .await?;
    let (_, all_total) = repo
        .get_paginated(&Scope::company(company.id), OfferFilter::default(), 0, 10)
        .await?;

    assert_eq!(by_provider.iter().map(|o| o.id).collect::<Vec<_>>(), vec![mine.id]);
    assert_eq!(by_owner.iter().map(|o| o.id).collect::<Vec<_>>(), vec![mine.id]);
    assert!(by_tenant.is_empty());
    assert_eq!(tenant_total, 0);
    assert_eq!(all_total, 2);

    Ok(())
}

/// Tests counting pending offers.
///
/// Expected: draft and sent offers counted, decided ones not
#[tokio::test]
async fn counts_pending_offers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) = factory::helpers::create_property_with_dependencies(db).await?;
    for status in ["draft", "sent", "accepted", "rejected"] {
        factory::offer::OfferFactory::new(db, company.id)
            .property_id(Some(property.id))
            .status(status)
            .build()
            .await?;
    }

    let count = OfferRepository::new(db)
        .count_pending(&Scope::company(company.id))
        .await?;

    assert_eq!(count, 2);

    Ok(())
}
