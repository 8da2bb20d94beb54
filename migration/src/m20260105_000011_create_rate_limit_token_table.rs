use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RateLimitToken::Table)
                    .if_not_exists()
                    .col(pk_auto(RateLimitToken::Id))
                    .col(string_uniq(RateLimitToken::Key))
                    .col(timestamp(RateLimitToken::WindowStart))
                    .col(integer(RateLimitToken::Count).default(0))
                    .col(integer(RateLimitToken::PreviousCount).default(0))
                    .col(
                        timestamp(RateLimitToken::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RateLimitToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RateLimitToken {
    Table,
    Id,
    Key,
    WindowStart,
    Count,
    PreviousCount,
    UpdatedAt,
}
