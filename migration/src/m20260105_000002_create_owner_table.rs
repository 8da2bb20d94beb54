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
                    .table(Owner::Table)
                    .if_not_exists()
                    .col(pk_auto(Owner::Id))
                    .col(integer(Owner::CompanyId))
                    .col(string(Owner::Name))
                    .col(string_null(Owner::Email))
                    .col(string_null(Owner::Phone))
                    .col(string_null(Owner::Address))
                    .col(string_null(Owner::Iban))
                    .col(text_null(Owner::Notes))
                    .col(
                        timestamp(Owner::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_owner_company_id")
                            .from(Owner::Table, Owner::CompanyId)
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
                    .name("idx_owner_company_id_name")
                    .table(Owner::Table)
                    .col(Owner::CompanyId)
                    .col(Owner::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Owner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Owner {
    Table,
    Id,
    CompanyId,
    Name,
    Email,
    Phone,
    Address,
    Iban,
    Notes,
    CreatedAt,
}
