use super::*;

/// Tests that a denial maps to a 429 error with a retry delay.
///
/// Expected: Err(AppError::RateLimited) with retry_after within the window
#[tokio::test]
async fn returns_rate_limited_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RateLimitToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let limiter = RateLimiter::new("api", 1, 60);

    limiter.enforce(db, "203.0.113.7").await?;
    let result = limiter.enforce(db, "203.0.113.7").await;

    match result {
        Err(AppError::RateLimited { retry_after }) => {
            assert!((1..=60).contains(&retry_after));
        }
        other => panic!("Expected RateLimited, got: {:?}", other),
    }

    Ok(())
}
