use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::file::{FileEntityType, UploadedFileDto},
    server::util::parse::parse_column,
};

/// Metadata of a stored file attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub id: i32,
    pub company_id: i32,
    pub uploaded_by: i32,
    pub entity_type: FileEntityType,
    pub entity_id: i32,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub storage_key: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl UploadedFile {
    pub fn from_entity(entity: entity::uploaded_file::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            company_id: entity.company_id,
            uploaded_by: entity.uploaded_by,
            entity_type: parse_column(&entity.entity_type)?,
            entity_id: entity.entity_id,
            file_name: entity.file_name,
            content_type: entity.content_type,
            size_bytes: entity.size_bytes,
            storage_key: entity.storage_key,
            url: entity.url,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UploadedFileDto {
        UploadedFileDto {
            id: self.id,
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            file_name: self.file_name,
            content_type: self.content_type,
            size_bytes: self.size_bytes,
            url: self.url,
            uploaded_by: self.uploaded_by,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateUploadedFileParams {
    pub company_id: i32,
    pub uploaded_by: i32,
    pub entity_type: FileEntityType,
    pub entity_id: i32,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub storage_key: String,
    pub url: String,
}

/// A file received from a multipart upload, before it is stored.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub entity_type: FileEntityType,
    pub entity_id: i32,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
