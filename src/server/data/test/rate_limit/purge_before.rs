use super::*;

/// Tests purging counters not updated since the cutoff.
///
/// Expected: Ok(1) for a cutoff in the future, Ok(0) for one in the past
#[tokio::test]
async fn purges_stale_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RateLimitToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RateLimitRepository::new(db);
    repo.save("login:a", WindowState::fresh(Utc::now())).await?;

    assert_eq!(repo.purge_before(Utc::now() - Duration::hours(1)).await?, 0);
    assert_eq!(repo.purge_before(Utc::now() + Duration::hours(1)).await?, 1);
    assert!(repo.get("login:a").await?.is_none());

    Ok(())
}
