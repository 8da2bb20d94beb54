use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::api::string_enum;

/// Kind of record a file is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum FileEntityType {
    Owner,
    Tenant,
    Provider,
    Property,
    Contract,
    Issue,
    Offer,
}

string_enum!(FileEntityType, "file entity type", {
    Owner => "owner",
    Tenant => "tenant",
    Provider => "provider",
    Property => "property",
    Contract => "contract",
    Issue => "issue",
    Offer => "offer",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UploadedFileDto {
    pub id: i32,
    pub entity_type: FileEntityType,
    pub entity_id: i32,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub url: String,
    pub uploaded_by: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileQueryDto {
    pub entity_type: FileEntityType,
    pub entity_id: i32,
}
