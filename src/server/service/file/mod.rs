//! File attachments on CRM records.
//!
//! Uploads are attached to one owner, tenant, provider, property, contract, issue
//! or offer of the uploader's company. The bytes go to the configured [`Storage`]
//! backend and the metadata to the `uploaded_file` table.

pub mod storage;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::file::FileEntityType,
    server::{
        data::{
            contract::ContractRepository, issue::IssueRepository, offer::OfferRepository,
            owner::OwnerRepository, property::PropertyRepository, provider::ProviderRepository,
            tenant::TenantRepository, uploaded_file::UploadedFileRepository,
        },
        error::AppError,
        model::{
            file::{CreateUploadedFileParams, IncomingFile, UploadedFile},
            scope::Scope,
            user::User,
        },
        service::file::storage::Storage,
        util::text::sanitize_file_name,
    },
};

/// Largest accepted upload, 10 MiB.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Content types accepted for uploads.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "image/png",
    "image/jpeg",
    "image/webp",
    "image/gif",
    "text/plain",
    "text/csv",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

pub struct FileService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a Storage,
}

impl<'a> FileService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a Storage) -> Self {
        Self { db, storage }
    }

    /// Stores an uploaded file and records its metadata.
    ///
    /// # Arguments
    /// - `uploader` - Staff user performing the upload
    /// - `file` - Parsed multipart upload
    ///
    /// # Returns
    /// - `Ok(UploadedFile)` - Stored file metadata with its public URL
    /// - `Err(AppError::PayloadTooLarge)` - File exceeds [`MAX_UPLOAD_BYTES`]
    /// - `Err(AppError::BadRequest)` - Empty file, unsupported type or unknown target
    /// - `Err(AppError)` - Storage or database failure
    pub async fn upload(&self, uploader: &User, file: IncomingFile) -> Result<UploadedFile, AppError> {
        if file.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::PayloadTooLarge(format!(
                "Files may be at most {} MiB",
                MAX_UPLOAD_BYTES / (1024 * 1024)
            )));
        }

        if file.bytes.is_empty() {
            return Err(AppError::BadRequest("The file is empty".to_string()));
        }

        let content_type = normalize_content_type(&file.content_type);
        if !ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Files of type '{}' are not accepted",
                content_type
            )));
        }

        let company_id = uploader.company_id;
        if !self
            .entity_exists(company_id, file.entity_type, file.entity_id)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "{} {} does not exist",
                file.entity_type, file.entity_id
            )));
        }

        let storage_key = storage_key(company_id, file.entity_type, file.entity_id, &file.file_name);
        let size_bytes = file.bytes.len() as i64;

        let url = self
            .storage
            .put(&storage_key, file.bytes, &content_type)
            .await?;

        let created = UploadedFileRepository::new(self.db)
            .create(CreateUploadedFileParams {
                company_id,
                uploaded_by: uploader.id,
                entity_type: file.entity_type,
                entity_id: file.entity_id,
                file_name: file.file_name,
                content_type,
                size_bytes,
                storage_key: storage_key.clone(),
                url,
            })
            .await;

        match created {
            Ok(uploaded) => Ok(uploaded),
            Err(err) => {
                if let Err(cleanup) = self.storage.delete(&storage_key).await {
                    tracing::warn!("Failed to remove orphaned upload {}: {}", storage_key, cleanup);
                }
                Err(err.into())
            }
        }
    }

    /// Lists the files attached to one record, newest first
    pub async fn list(
        &self,
        company_id: i32,
        entity_type: FileEntityType,
        entity_id: i32,
    ) -> Result<Vec<UploadedFile>, AppError> {
        Ok(UploadedFileRepository::new(self.db)
            .get_for_entity(company_id, entity_type, entity_id)
            .await?)
    }

    /// Deletes the stored object, then the metadata row
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        let repo = UploadedFileRepository::new(self.db);

        let file = repo
            .find_by_id(company_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("File {} not found", id)))?;

        self.storage.delete(&file.storage_key).await?;
        repo.delete(company_id, id).await?;

        Ok(())
    }

    async fn entity_exists(
        &self,
        company_id: i32,
        entity_type: FileEntityType,
        entity_id: i32,
    ) -> Result<bool, AppError> {
        let scope = Scope::company(company_id);

        let exists = match entity_type {
            FileEntityType::Owner => OwnerRepository::new(self.db)
                .find_by_id(company_id, entity_id)
                .await?
                .is_some(),
            FileEntityType::Tenant => TenantRepository::new(self.db)
                .find_by_id(company_id, entity_id)
                .await?
                .is_some(),
            FileEntityType::Provider => ProviderRepository::new(self.db)
                .find_by_id(company_id, entity_id)
                .await?
                .is_some(),
            FileEntityType::Property => PropertyRepository::new(self.db)
                .find_by_id(&scope, entity_id)
                .await?
                .is_some(),
            FileEntityType::Contract => ContractRepository::new(self.db)
                .find_by_id(&scope, entity_id)
                .await?
                .is_some(),
            FileEntityType::Issue => IssueRepository::new(self.db)
                .find_by_id(&scope, entity_id)
                .await?
                .is_some(),
            FileEntityType::Offer => OfferRepository::new(self.db)
                .find_by_id(&scope, entity_id)
                .await?
                .is_some(),
        };

        Ok(exists)
    }
}

/// `{company_id}/{entity_type}/{entity_id}/{uuid}-{sanitized name}`
pub fn storage_key(
    company_id: i32,
    entity_type: FileEntityType,
    entity_id: i32,
    file_name: &str,
) -> String {
    format!(
        "{}/{}/{}/{}-{}",
        company_id,
        entity_type,
        entity_id,
        uuid::Uuid::new_v4(),
        sanitize_file_name(file_name)
    )
}

/// Drops parameters such as `; charset=utf-8` and lowercases the media type.
fn normalize_content_type(value: &str) -> String {
    value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}
