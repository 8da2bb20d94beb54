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
                    .table(Provider::Table)
                    .if_not_exists()
                    .col(pk_auto(Provider::Id))
                    .col(integer(Provider::CompanyId))
                    .col(string(Provider::Name))
                    .col(string_null(Provider::Email))
                    .col(string_null(Provider::Phone))
                    .col(string_null(Provider::ServiceType))
                    .col(text_null(Provider::Notes))
                    .col(
                        timestamp(Provider::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_provider_company_id")
                            .from(Provider::Table, Provider::CompanyId)
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
                    .name("idx_provider_company_id_name")
                    .table(Provider::Table)
                    .col(Provider::CompanyId)
                    .col(Provider::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Provider::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Provider {
    Table,
    Id,
    CompanyId,
    Name,
    Email,
    Phone,
    ServiceType,
    Notes,
    CreatedAt,
}
