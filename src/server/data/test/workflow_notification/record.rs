use super::*;

/// Tests the notification de-duplication log.
///
/// Expected: exists is false before record, true after, and false for another period
#[tokio::test]
async fn records_sent_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let notification = Notification {
        company_id: company.id,
        kind: NotificationKind::RentDue,
        entity_id: 7,
        period_key: "2025-06".to_string(),
        recipient: "tenant@example.com".to_string(),
        subject: "Rent due".to_string(),
        text: "Please pay".to_string(),
    };

    let repo = WorkflowNotificationRepository::new(db);

    assert!(!repo.exists(&notification).await?);
    repo.record(&notification).await?;
    assert!(repo.exists(&notification).await?);

    let next_month = Notification {
        period_key: "2025-07".to_string(),
        ..notification
    };
    assert!(!repo.exists(&next_month).await?);

    Ok(())
}
