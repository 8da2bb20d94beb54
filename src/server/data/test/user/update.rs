use super::*;

/// Tests updating role, active flag and profile link.
///
/// Expected: Ok(Some) with the owner link and the account disabled
#[tokio::test]
async fn updates_role_and_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let owner = factory::create_owner(db, company.id).await?;
    let user = factory::create_user(db, company.id).await?;

    let updated = UserRepository::new(db)
        .update(UpdateUserParams {
            id: user.id,
            company_id: company.id,
            name: "Olga Owner".to_string(),
            role: UserRole::Owner,
            active: false,
            link: ProfileLink {
                owner_id: Some(owner.id),
                ..Default::default()
            },
        })
        .await?
        .unwrap();

    assert_eq!(updated.role, UserRole::Owner);
    assert_eq!(updated.owner_id, Some(owner.id));
    assert!(!updated.active);

    Ok(())
}

/// Tests changing the password hash and login timestamp.
///
/// Expected: Ok with the new hash and last_login_at set
#[tokio::test]
async fn sets_password_and_last_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let user = factory::create_user(db, company.id).await?;

    let repo = UserRepository::new(db);
    repo.set_password_hash(user.id, "new-hash".to_string()).await?;
    repo.touch_last_login(user.id).await?;

    assert_eq!(repo.get_password_hash(user.id).await?.as_deref(), Some("new-hash"));
    assert!(repo.find_by_id(user.id).await?.unwrap().last_login_at.is_some());

    Ok(())
}
