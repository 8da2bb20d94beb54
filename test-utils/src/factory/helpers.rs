//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values (emails, slugs, names) in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a company, owner, tenant, property and an active contract.
///
/// All entities use factory defaults. Use the individual factories when a test
/// needs specific dates, rents or statuses.
///
/// # Returns
/// - `Ok((company, owner, tenant, property, contract))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_contract_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::company::Model,
        entity::owner::Model,
        entity::tenant::Model,
        entity::property::Model,
        entity::contract::Model,
    ),
    DbErr,
> {
    let company = crate::factory::company::create_company(db).await?;
    let owner = crate::factory::owner::create_owner(db, company.id).await?;
    let tenant = crate::factory::tenant::create_tenant(db, company.id).await?;
    let property = crate::factory::property::create_property(db, company.id, owner.id).await?;
    let contract =
        crate::factory::contract::create_contract(db, company.id, property.id, tenant.id).await?;

    Ok((company, owner, tenant, property, contract))
}

/// Creates a company with one owner and one property.
///
/// # Returns
/// - `Ok((company, owner, property))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_property_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::company::Model,
        entity::owner::Model,
        entity::property::Model,
    ),
    DbErr,
> {
    let company = crate::factory::company::create_company(db).await?;
    let owner = crate::factory::owner::create_owner(db, company.id).await?;
    let property = crate::factory::property::create_property(db, company.id, owner.id).await?;

    Ok((company, owner, property))
}
