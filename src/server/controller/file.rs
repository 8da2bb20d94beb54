use axum::{
    extract::{multipart::MultipartError, Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        file::{FileEntityType, FileQueryDto, UploadedFileDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::file::IncomingFile,
        service::file::FileService,
        state::AppState,
    },
};

/// Tag for grouping file endpoints in OpenAPI documentation
pub static FILE_TAG: &str = "file";

/// Upload a file and attach it to a record.
///
/// Expects a multipart body with the fields `entity_type`, `entity_id` and
/// `file`. The target record must exist in the caller's company.
///
/// # Access Control
/// - `Staff` - Only admins and managers can upload files
///
/// # Arguments
/// - `state` - Application state containing the database and storage backend
/// - `session` - User's session for authentication
/// - `multipart` - The upload form
///
/// # Returns
/// - `201 Created` - Stored file metadata with its download URL
/// - `400 Bad Request` - Missing field, unknown target or disallowed content type
/// - `413 Payload Too Large` - File larger than 10 MiB
#[utoipa::path(
    post,
    path = "/api/files",
    tag = FILE_TAG,
    request_body(content_type = "multipart/form-data", description = "Fields `entity_type`, `entity_id` and `file`"),
    responses(
        (status = 201, description = "File uploaded", body = UploadedFileDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 413, description = "File too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let mut entity_type: Option<FileEntityType> = None;
    let mut entity_id: Option<i32> = None;
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("entity_type") => {
                let value = field.text().await.map_err(multipart_error)?;
                entity_type = Some(
                    value
                        .trim()
                        .parse::<FileEntityType>()
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            Some("entity_id") => {
                let value = field.text().await.map_err(multipart_error)?;
                entity_id = Some(value.trim().parse::<i32>().map_err(|_| {
                    AppError::BadRequest(format!("Invalid entity_id '{}'", value))
                })?);
            }
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;

                file = Some((file_name, content_type, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let (Some(entity_type), Some(entity_id), Some((file_name, content_type, bytes))) =
        (entity_type, entity_id, file)
    else {
        return Err(AppError::BadRequest(
            "Fields entity_type, entity_id and file are required".to_string(),
        ));
    };

    let uploaded = FileService::new(&state.db, &state.storage)
        .upload(
            &user,
            IncomingFile {
                entity_type,
                entity_id,
                file_name,
                content_type,
                bytes,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(uploaded.into_dto())))
}

/// List the files attached to a record, newest first.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/files",
    tag = FILE_TAG,
    params(
        ("entity_type" = String, Query, description = "owner, tenant, provider, property, contract, issue or offer"),
        ("entity_id" = i32, Query, description = "ID of the record")
    ),
    responses(
        (status = 200, description = "Attached files", body = Vec<UploadedFileDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_files(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<FileQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let files = FileService::new(&state.db, &state.storage)
        .list(user.company_id, query.entity_type, query.entity_id)
        .await?;

    let files: Vec<UploadedFileDto> = files.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(files)))
}

/// Delete a file from storage and its metadata.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    delete,
    path = "/api/files/{id}",
    tag = FILE_TAG,
    params(("id" = i32, Path, description = "File ID")),
    responses(
        (status = 204, description = "File deleted"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_file(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    FileService::new(&state.db, &state.storage)
        .delete(user.company_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Maps multipart read failures; an exceeded body limit becomes 413.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Uploaded file is too large".to_string())
    } else {
        AppError::BadRequest(err.body_text())
    }
}
