use super::*;

/// Tests rendering contract and offer documents.
///
/// Expected: PDF bytes for both
#[tokio::test]
async fn renders_contract_and_offer_pdfs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, _, property, contract) =
        factory::helpers::create_contract_with_dependencies(db).await?;
    let provider = factory::create_provider(db, company.id).await?;
    let issue = factory::create_issue(db, company.id, property.id).await?;
    let offer = factory::offer::OfferFactory::new(db, company.id)
        .issue_id(Some(issue.id))
        .property_id(Some(property.id))
        .provider_id(Some(provider.id))
        .build()
        .await?;

    let service = ExportService::new(db);

    let contract_pdf = service.contract_pdf(company.id, contract.id).await?;
    assert_eq!(contract_pdf.content_type, PDF_CONTENT_TYPE);
    assert!(contract_pdf.file_name.ends_with(".pdf"));
    assert!(contract_pdf.bytes.starts_with(b"%PDF-"));

    let offer_pdf = service.offer_pdf(company.id, offer.id).await?;
    assert!(offer_pdf.bytes.starts_with(b"%PDF-"));

    Ok(())
}

/// Tests that documents of another company are not rendered.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn hides_foreign_documents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, contract) = factory::helpers::create_contract_with_dependencies(db).await?;
    let other = factory::create_company(db).await?;

    let result = ExportService::new(db).contract_pdf(other.id, contract.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
