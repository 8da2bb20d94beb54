use crate::{
    client::{
        api::helper::{delete, get, parse_empty_response, parse_response, send_request, with_query},
        model::error::ApiError,
    },
    model::file::{FileEntityType, UploadedFileDto},
};

pub async fn get_files(
    entity_type: FileEntityType,
    entity_id: i32,
) -> Result<Vec<UploadedFileDto>, ApiError> {
    let url = with_query(
        "/api/files",
        &[
            ("entity_type", Some(entity_type.as_str().to_string())),
            ("entity_id", Some(entity_id.to_string())),
        ],
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn delete_file(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/files/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
