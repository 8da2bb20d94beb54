use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::file::FileEntityType,
    server::model::file::{CreateUploadedFileParams, UploadedFile},
};

pub struct UploadedFileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UploadedFileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records metadata of a stored file
    pub async fn create(&self, params: CreateUploadedFileParams) -> Result<UploadedFile, DbErr> {
        let file = entity::uploaded_file::ActiveModel {
            company_id: ActiveValue::Set(params.company_id),
            uploaded_by: ActiveValue::Set(params.uploaded_by),
            entity_type: ActiveValue::Set(params.entity_type.as_str().to_string()),
            entity_id: ActiveValue::Set(params.entity_id),
            file_name: ActiveValue::Set(params.file_name),
            content_type: ActiveValue::Set(params.content_type),
            size_bytes: ActiveValue::Set(params.size_bytes),
            storage_key: ActiveValue::Set(params.storage_key),
            url: ActiveValue::Set(params.url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        UploadedFile::from_entity(file)
    }

    pub async fn find_by_id(
        &self,
        company_id: i32,
        id: i32,
    ) -> Result<Option<UploadedFile>, DbErr> {
        entity::prelude::UploadedFile::find_by_id(id)
            .filter(entity::uploaded_file::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await?
            .map(UploadedFile::from_entity)
            .transpose()
    }

    /// Gets the files attached to one record, newest first
    pub async fn get_for_entity(
        &self,
        company_id: i32,
        entity_type: FileEntityType,
        entity_id: i32,
    ) -> Result<Vec<UploadedFile>, DbErr> {
        entity::prelude::UploadedFile::find()
            .filter(entity::uploaded_file::Column::CompanyId.eq(company_id))
            .filter(entity::uploaded_file::Column::EntityType.eq(entity_type.as_str()))
            .filter(entity::uploaded_file::Column::EntityId.eq(entity_id))
            .order_by_desc(entity::uploaded_file::Column::CreatedAt)
            .order_by_desc(entity::uploaded_file::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(UploadedFile::from_entity)
            .collect()
    }

    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UploadedFile::delete_many()
            .filter(entity::uploaded_file::Column::Id.eq(id))
            .filter(entity::uploaded_file::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
