use std::path::PathBuf;

use super::as_user;
use crate::{
    model::file::FileEntityType,
    server::{
        error::AppError,
        model::file::IncomingFile,
        service::file::{storage::Storage, FileService, MAX_UPLOAD_BYTES},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod upload;

fn temp_root() -> PathBuf {
    std::env::temp_dir().join(format!("rentdesk-files-{}", uuid::Uuid::new_v4()))
}

fn incoming(entity_type: FileEntityType, entity_id: i32, bytes: Vec<u8>) -> IncomingFile {
    IncomingFile {
        entity_type,
        entity_id,
        file_name: "lease scan.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        bytes,
    }
}
