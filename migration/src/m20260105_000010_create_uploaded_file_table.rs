use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_company_table::Company, m20260105_000005_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UploadedFile::Table)
                    .if_not_exists()
                    .col(pk_auto(UploadedFile::Id))
                    .col(integer(UploadedFile::CompanyId))
                    .col(integer(UploadedFile::UploadedBy))
                    .col(string(UploadedFile::EntityType))
                    .col(integer(UploadedFile::EntityId))
                    .col(string(UploadedFile::FileName))
                    .col(string(UploadedFile::ContentType))
                    .col(big_integer(UploadedFile::SizeBytes))
                    .col(string_uniq(UploadedFile::StorageKey))
                    .col(string(UploadedFile::Url))
                    .col(
                        timestamp(UploadedFile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_uploaded_file_company_id")
                            .from(UploadedFile::Table, UploadedFile::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_uploaded_file_uploaded_by")
                            .from(UploadedFile::Table, UploadedFile::UploadedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_uploaded_file_entity")
                    .table(UploadedFile::Table)
                    .col(UploadedFile::EntityType)
                    .col(UploadedFile::EntityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UploadedFile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UploadedFile {
    Table,
    Id,
    CompanyId,
    UploadedBy,
    EntityType,
    EntityId,
    FileName,
    ContentType,
    SizeBytes,
    StorageKey,
    Url,
    CreatedAt,
}
