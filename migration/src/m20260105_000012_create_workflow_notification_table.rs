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
                    .table(WorkflowNotification::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkflowNotification::Id))
                    .col(integer(WorkflowNotification::CompanyId))
                    .col(string(WorkflowNotification::Kind))
                    .col(integer(WorkflowNotification::EntityId))
                    .col(string(WorkflowNotification::PeriodKey))
                    .col(string(WorkflowNotification::Recipient))
                    .col(
                        timestamp(WorkflowNotification::SentAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workflow_notification_company_id")
                            .from(WorkflowNotification::Table, WorkflowNotification::CompanyId)
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
                    .name("idx_workflow_notification_unique")
                    .table(WorkflowNotification::Table)
                    .col(WorkflowNotification::Kind)
                    .col(WorkflowNotification::EntityId)
                    .col(WorkflowNotification::PeriodKey)
                    .col(WorkflowNotification::Recipient)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkflowNotification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkflowNotification {
    Table,
    Id,
    CompanyId,
    Kind,
    EntityId,
    PeriodKey,
    Recipient,
    SentAt,
}
