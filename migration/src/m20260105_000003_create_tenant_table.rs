use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_company_table::Company;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tenant::Table)
                    .if_not_exists()
                    .col(pk_auto(Tenant::Id))
                    .col(integer(Tenant::CompanyId))
                    .col(string(Tenant::Name))
                    .col(string_null(Tenant::Email))
                    .col(string_null(Tenant::Phone))
                    .col(text_null(Tenant::Notes))
                    .col(
                        timestamp(Tenant::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tenant_company_id")
                            .from(Tenant::Table, Tenant::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tenant_company_id_name")
                    .table(Tenant::Table)
                    .col(Tenant::CompanyId)
                    .col(Tenant::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tenant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tenant {
    Table,
    Id,
    CompanyId,
    Name,
    Email,
    Phone,
    Notes,
    CreatedAt,
}
