use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_company_table::Company, m20260105_000003_create_tenant_table::Tenant,
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
                    .table(Contract::Table)
                    .if_not_exists()
                    .col(pk_auto(Contract::Id))
                    .col(integer(Contract::CompanyId))
                    .col(integer(Contract::PropertyId))
                    .col(integer(Contract::TenantId))
                    .col(date(Contract::StartDate))
                    .col(date_null(Contract::EndDate))
                    .col(big_integer(Contract::MonthlyRentCents))
                    .col(big_integer(Contract::DepositCents).default(0))
                    .col(integer(Contract::PaymentDay).default(1))
                    .col(string(Contract::Status))
                    .col(text_null(Contract::Notes))
                    .col(
                        timestamp(Contract::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contract_company_id")
                            .from(Contract::Table, Contract::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contract_property_id")
                            .from(Contract::Table, Contract::PropertyId)
                            .to(Property::Table, Property::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contract_tenant_id")
                            .from(Contract::Table, Contract::TenantId)
                            .to(Tenant::Table, Tenant::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contract_status_end_date")
                    .table(Contract::Table)
                    .col(Contract::Status)
                    .col(Contract::EndDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contract::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Contract {
    Table,
    Id,
    CompanyId,
    PropertyId,
    TenantId,
    StartDate,
    EndDate,
    MonthlyRentCents,
    DepositCents,
    PaymentDay,
    Status,
    Notes,
    CreatedAt,
}
