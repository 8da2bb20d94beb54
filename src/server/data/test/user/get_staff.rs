use super::*;

/// Tests listing the active staff of a company.
///
/// Expected: Ok with the admin and manager, without the disabled manager or tenant
#[tokio::test]
async fn lists_active_admins_and_managers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let admin = factory::create_admin(db, company.id).await?;
    let manager = factory::create_user(db, company.id).await?;
    factory::user::UserFactory::new(db, company.id)
        .active(false)
        .build()
        .await?;
    factory::user::UserFactory::new(db, company.id)
        .role("tenant")
        .build()
        .await?;

    let staff = UserRepository::new(db).get_staff(company.id).await?;

    assert_eq!(
        staff.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![admin.id, manager.id]
    );

    Ok(())
}
