use super::*;

/// Tests recording, listing and deleting file metadata.
///
/// Expected: the file is listed for its record only and removed by delete
#[tokio::test]
async fn records_lists_and_deletes_files() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let user = factory::create_user(db, company.id).await?;
    let owner = factory::create_owner(db, company.id).await?;

    let repo = UploadedFileRepository::new(db);
    let file = repo
        .create(CreateUploadedFileParams {
            company_id: company.id,
            uploaded_by: user.id,
            entity_type: FileEntityType::Owner,
            entity_id: owner.id,
            file_name: "id-card.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            size_bytes: 1024,
            storage_key: format!("{}/owner/{}/abc-id-card.pdf", company.id, owner.id),
            url: "/uploads/key".to_string(),
        })
        .await?;

    let listed = repo
        .get_for_entity(company.id, FileEntityType::Owner, owner.id)
        .await?;
    let other_type = repo
        .get_for_entity(company.id, FileEntityType::Tenant, owner.id)
        .await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, file.id);
    assert!(other_type.is_empty());

    assert!(repo.delete(company.id, file.id).await?);
    assert!(repo.find_by_id(company.id, file.id).await?.is_none());

    Ok(())
}
