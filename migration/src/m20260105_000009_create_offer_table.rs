use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_company_table::Company,
    m20260105_000004_create_provider_table::Provider,
    m20260105_000006_create_property_table::Property, m20260105_000008_create_issue_table::Issue,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offer::Table)
                    .if_not_exists()
                    .col(pk_auto(Offer::Id))
                    .col(integer(Offer::CompanyId))
                    .col(integer_null(Offer::IssueId))
                    .col(integer_null(Offer::PropertyId))
                    .col(integer_null(Offer::ProviderId))
                    .col(string(Offer::Title))
                    .col(text_null(Offer::Description))
                    .col(big_integer(Offer::AmountCents))
                    .col(string(Offer::Status))
                    .col(date_null(Offer::ValidUntil))
                    .col(
                        timestamp(Offer::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Offer::DecidedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offer_company_id")
                            .from(Offer::Table, Offer::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offer_issue_id")
                            .from(Offer::Table, Offer::IssueId)
                            .to(Issue::Table, Issue::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offer_property_id")
                            .from(Offer::Table, Offer::PropertyId)
                            .to(Property::Table, Property::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offer_provider_id")
                            .from(Offer::Table, Offer::ProviderId)
                            .to(Provider::Table, Provider::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Offer {
    Table,
    Id,
    CompanyId,
    IssueId,
    PropertyId,
    ProviderId,
    Title,
    Description,
    AmountCents,
    Status,
    ValidUntil,
    CreatedAt,
    DecidedAt,
}
