use super::*;

/// Tests exporting every entity kind of a populated company.
///
/// Expected: an xlsx (zip) document named after the entity for each kind
#[tokio::test]
async fn exports_every_entity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, _, property, _) =
        factory::helpers::create_contract_with_dependencies(db).await?;
    factory::create_provider(db, company.id).await?;
    factory::create_issue(db, company.id, property.id).await?;
    factory::create_offer(db, company.id, property.id).await?;

    let service = ExportService::new(db);

    for entity in ExportEntity::ALL {
        let export = service.entity_workbook(company.id, *entity).await?;

        assert!(export.file_name.starts_with(entity.as_str()));
        assert!(export.file_name.ends_with(".xlsx"));
        assert_eq!(export.content_type, XLSX_CONTENT_TYPE);
        assert!(export.bytes.starts_with(b"PK"));
    }

    Ok(())
}

/// Tests exporting a financial report.
///
/// Expected: xlsx named after the period
#[tokio::test]
async fn exports_financial_report() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, _, _, _, _) = factory::helpers::create_contract_with_dependencies(db).await?;

    let report = ReportService::new(db)
        .financial(&Scope::company(company.id), 2025, Some(4), None)
        .await?;
    let export = ExportService::new(db).report_workbook(&report)?;

    assert_eq!(export.file_name, "financial-report-2025-04.xlsx");
    assert!(export.bytes.starts_with(b"PK"));

    Ok(())
}
