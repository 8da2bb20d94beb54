//! Object storage for uploaded files.

use std::path::PathBuf;

use aws_sdk_s3::primitives::ByteStream;
use dioxus_logger::tracing;

use crate::server::{
    config::{Config, StorageBackend},
    error::{internal::InternalError, AppError},
};

/// URL prefix under which the local backend's directory is served.
pub const LOCAL_UPLOADS_PATH: &str = "/uploads";

/// Storage backend holding the bytes of uploaded files.
///
/// Keys are relative paths such as `3/property/12/<uuid>-lease.pdf`; the backend
/// returns the public URL the file can be downloaded from.
#[derive(Clone)]
pub enum Storage {
    /// Files below a directory on disk, served by the app under `/uploads`.
    Local { root: PathBuf },
    /// Files in an S3 bucket, linked through a public base URL.
    S3 {
        client: aws_sdk_s3::Client,
        bucket: String,
        public_url: String,
    },
}

impl Storage {
    /// Builds the backend selected by the configuration.
    ///
    /// For S3 the AWS credentials and region are taken from the environment.
    pub async fn from_config(config: &Config) -> Self {
        match &config.storage_backend {
            StorageBackend::Local => Self::local(&config.upload_dir),
            StorageBackend::S3 { bucket, public_url } => {
                let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                    .load()
                    .await;

                Self::S3 {
                    client: aws_sdk_s3::Client::new(&aws_config),
                    bucket: bucket.clone(),
                    public_url: public_url.clone(),
                }
            }
        }
    }

    pub fn local(root: impl Into<PathBuf>) -> Self {
        Self::Local { root: root.into() }
    }

    /// Stores `bytes` under `key`.
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored object
    /// - `Err(AppError)` - Disk or S3 failure
    pub async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<String, AppError> {
        match self {
            Self::Local { root } => {
                let path = root.join(key);
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(&path, bytes).await?;

                Ok(format!("{}/{}", LOCAL_UPLOADS_PATH, key))
            }
            Self::S3 {
                client,
                bucket,
                public_url,
            } => {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(key)
                    .content_type(content_type)
                    .body(ByteStream::from(bytes))
                    .send()
                    .await
                    .map_err(|e| InternalError::Storage(format!("put {}: {}", key, e)))?;

                Ok(format!("{}/{}", public_url, key))
            }
        }
    }

    /// Removes the object stored under `key`; a missing object is not an error.
    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        match self {
            Self::Local { root } => match tokio::fs::remove_file(root.join(key)).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::warn!("Upload {} was already missing from disk", key);
                    Ok(())
                }
                Err(e) => Err(e.into()),
            },
            Self::S3 { client, bucket, .. } => {
                client
                    .delete_object()
                    .bucket(bucket)
                    .key(key)
                    .send()
                    .await
                    .map_err(|e| InternalError::Storage(format!("delete {}: {}", key, e)))?;

                Ok(())
            }
        }
    }
}
