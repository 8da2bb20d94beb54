pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_company_table;
mod m20260105_000002_create_owner_table;
mod m20260105_000003_create_tenant_table;
mod m20260105_000004_create_provider_table;
mod m20260105_000005_create_user_table;
mod m20260105_000006_create_property_table;
mod m20260105_000007_create_contract_table;
mod m20260105_000008_create_issue_table;
mod m20260105_000009_create_offer_table;
mod m20260105_000010_create_uploaded_file_table;
mod m20260105_000011_create_rate_limit_token_table;
mod m20260105_000012_create_workflow_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_company_table::Migration),
            Box::new(m20260105_000002_create_owner_table::Migration),
            Box::new(m20260105_000003_create_tenant_table::Migration),
            Box::new(m20260105_000004_create_provider_table::Migration),
            Box::new(m20260105_000005_create_user_table::Migration),
            Box::new(m20260105_000006_create_property_table::Migration),
            Box::new(m20260105_000007_create_contract_table::Migration),
            Box::new(m20260105_000008_create_issue_table::Migration),
            Box::new(m20260105_000009_create_offer_table::Migration),
            Box::new(m20260105_000010_create_uploaded_file_table::Migration),
            Box::new(m20260105_000011_create_rate_limit_token_table::Migration),
            Box::new(m20260105_000012_create_workflow_notification_table::Migration),
        ]
    }
}
