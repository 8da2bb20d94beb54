use super::*;

/// Tests that the limiter persists counters in the database.
///
/// Expected: two hits allowed, the third denied, and a row stored for the key
#[tokio::test]
async fn counts_in_database() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RateLimitToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let limiter = RateLimiter::new("api", 2, 60);
    let now = Utc::now();

    assert_eq!(limiter.check_at(db, "user-1", now).await, Decision::Allowed);
    assert_eq!(limiter.check_at(db, "user-1", now).await, Decision::Allowed);
    assert!(!limiter.check_at(db, "user-1", now).await.is_allowed());

    // Other identities have their own budget.
    assert_eq!(limiter.check_at(db, "user-2", now).await, Decision::Allowed);

    let stored = crate::server::data::rate_limit::RateLimitRepository::new(db)
        .get("api:user-1")
        .await?
        .unwrap();
    assert_eq!(stored.count, 2);

    Ok(())
}

/// Tests falling back to memory when the table is missing.
///
/// Expected: the same limits apply without a rate_limit_token table
#[tokio::test]
async fn falls_back_to_memory_without_table() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let limiter = RateLimiter::new("login", 1, 60);
    let now = Utc::now();

    assert!(limiter.check_at(db, "alice", now).await.is_allowed());
    assert!(!limiter.check_at(db, "alice", now).await.is_allowed());

    // Two idle windows later the counter is fresh again.
    let later = now + Duration::seconds(121);
    assert!(limiter.check_at(db, "alice", later).await.is_allowed());

    Ok(())
}
