use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_company_table::Company, m20260105_000002_create_owner_table::Owner,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Property::Table)
                    .if_not_exists()
                    .col(pk_auto(Property::Id))
                    .col(integer(Property::CompanyId))
                    .col(integer(Property::OwnerId))
                    .col(string(Property::Name))
                    .col(string(Property::Address))
                    .col(string(Property::City))
                    .col(string_null(Property::PostalCode))
                    .col(string(Property::PropertyType))
                    .col(big_integer(Property::MonthlyRentCents).default(0))
                    .col(text_null(Property::Notes))
                    .col(
                        timestamp(Property::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_company_id")
                            .from(Property::Table, Property::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_owner_id")
                            .from(Property::Table, Property::OwnerId)
                            .to(Owner::Table, Owner::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Property::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Property {
    Table,
    Id,
    CompanyId,
    OwnerId,
    Name,
    Address,
    City,
    PostalCode,
    PropertyType,
    MonthlyRentCents,
    Notes,
    CreatedAt,
}
