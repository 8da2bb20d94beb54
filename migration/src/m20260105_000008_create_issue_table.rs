use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_company_table::Company, m20260105_000003_create_tenant_table::Tenant,
    m20260105_000004_create_provider_table::Provider,
    m20260105_000006_create_property_table::Property,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Issue::Table)
                    .if_not_exists()
                    .col(pk_auto(Issue::Id))
                    .col(integer(Issue::CompanyId))
                    .col(integer(Issue::PropertyId))
                    .col(integer_null(Issue::TenantId))
                    .col(integer_null(Issue::ProviderId))
                    .col(string(Issue::Title))
                    .col(text(Issue::Description))
                    .col(string(Issue::Priority))
                    .col(string(Issue::Status))
                    .col(
                        timestamp(Issue::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Issue::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Issue::ResolvedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_company_id")
                            .from(Issue::Table, Issue::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_property_id")
                            .from(Issue::Table, Issue::PropertyId)
                            .to(Property::Table, Property::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_tenant_id")
                            .from(Issue::Table, Issue::TenantId)
                            .to(Tenant::Table, Tenant::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_provider_id")
                            .from(Issue::Table, Issue::ProviderId)
                            .to(Provider::Table, Provider::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_issue_company_id_status")
                    .table(Issue::Table)
                    .col(Issue::CompanyId)
                    .col(Issue::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Issue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Issue {
    Table,
    Id,
    CompanyId,
    PropertyId,
    TenantId,
    ProviderId,
    Title,
    Description,
    Priority,
    Status,
    CreatedAt,
    UpdatedAt,
    ResolvedAt,
}
