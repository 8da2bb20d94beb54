use super::*;

/// Tests uploading, listing and deleting a file on a property.
///
/// Expected: bytes stored under the company prefix, listed, then removed
#[tokio::test]
async fn uploads_lists_and_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let manager = as_user(factory::create_user(db, company.id).await?);

    let root = temp_root();
    let storage = Storage::local(&root);
    let service = FileService::new(db, &storage);

    let uploaded = service
        .upload(
            &manager,
            incoming(FileEntityType::Property, property.id, b"%PDF-1.4".to_vec()),
        )
        .await?;

    assert_eq!(uploaded.company_id, company.id);
    assert_eq!(uploaded.uploaded_by, manager.id);
    assert_eq!(uploaded.size_bytes, 8);
    assert!(uploaded
        .storage_key
        .starts_with(&format!("{}/property/{}/", company.id, property.id)));
    assert!(root.join(&uploaded.storage_key).exists());

    let listed = service
        .list(company.id, FileEntityType::Property, property.id)
        .await?;
    assert_eq!(listed.len(), 1);

    service.delete(company.id, uploaded.id).await?;
    assert!(!root.join(&uploaded.storage_key).exists());
    assert!(service
        .list(company.id, FileEntityType::Property, property.id)
        .await?
        .is_empty());

    let _ = tokio::fs::remove_dir_all(&root).await;

    Ok(())
}

/// Tests the size, type and target checks.
///
/// Expected: PayloadTooLarge for oversized files, BadRequest for the rest
#[tokio::test]
async fn rejects_invalid_uploads() -> Result<(), AppError> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let (_, _, foreign_property) =
        factory::helpers::create_property_with_dependencies(db).await?;
    let manager = as_user(factory::create_user(db, company.id).await?);

    let root = temp_root();
    let storage = Storage::local(&root);
    let service = FileService::new(db, &storage);

    let too_large = incoming(
        FileEntityType::Property,
        property.id,
        vec![0; MAX_UPLOAD_BYTES + 1],
    );
    assert!(matches!(
        service.upload(&manager, too_large).await,
        Err(AppError::PayloadTooLarge(_))
    ));

    let empty = incoming(FileEntityType::Property, property.id, Vec::new());
    assert!(matches!(
        service.upload(&manager, empty).await,
        Err(AppError::BadRequest(_))
    ));

    let mut executable = incoming(FileEntityType::Property, property.id, b"MZ".to_vec());
    executable.content_type = "application/x-msdownload".to_string();
    assert!(matches!(
        service.upload(&manager, executable).await,
        Err(AppError::BadRequest(_))
    ));

    let foreign = incoming(FileEntityType::Property, foreign_property.id, b"x".to_vec());
    assert!(matches!(
        service.upload(&manager, foreign).await,
        Err(AppError::BadRequest(_))
    ));

    assert!(!root.exists());

    Ok(())
}
