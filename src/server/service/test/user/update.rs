use super::*;

/// Tests that admins cannot demote or disable themselves.
///
/// Expected: Err(BadRequest) for both changes
#[tokio::test]
async fn rejects_self_demotion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let admin = as_user(factory::create_admin(db, company.id).await?);

    let service = UserService::new(db);

    let demote = UpdateUserParams {
        id: admin.id,
        company_id: company.id,
        name: admin.name.clone(),
        role: UserRole::Manager,
        active: true,
        link: ProfileLink::default(),
    };
    assert!(matches!(
        service.update(&admin, demote).await,
        Err(AppError::BadRequest(_))
    ));

    let disable = UpdateUserParams {
        id: admin.id,
        company_id: company.id,
        name: admin.name.clone(),
        role: UserRole::Admin,
        active: false,
        link: ProfileLink::default(),
    };
    assert!(matches!(
        service.update(&admin, disable).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests updating another user of the company and a user of another company.
///
/// Expected: Ok for own company, Err(NotFound) across companies
#[tokio::test]
async fn updates_only_own_company() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let other = factory::create_company(db).await?;
    let admin = as_user(factory::create_admin(db, company.id).await?);
    let manager = factory::create_user(db, company.id).await?;
    let stranger = factory::create_user(db, other.id).await?;

    let service = UserService::new(db);

    let updated = service
        .update(
            &admin,
            UpdateUserParams {
                id: manager.id,
                company_id: company.id,
                name: "Renamed".to_string(),
                role: UserRole::Manager,
                active: false,
                link: ProfileLink::default(),
            },
        )
        .await?;
    assert_eq!(updated.name, "Renamed");
    assert!(!updated.active);

    let result = service
        .update(
            &admin,
            UpdateUserParams {
                id: stranger.id,
                company_id: company.id,
                name: "Hijacked".to_string(),
                role: UserRole::Manager,
                active: true,
                link: ProfileLink::default(),
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
