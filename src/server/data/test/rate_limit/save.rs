use super::*;

/// Tests inserting and then replacing a counter.
///
/// Expected: the second save overwrites the first
#[tokio::test]
async fn upserts_counter_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RateLimitToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RateLimitRepository::new(db);
    let now = Utc::now();

    assert!(repo.get("api:1").await?.is_none());

    repo.save(
        "api:1",
        WindowState {
            window_start: now,
            count: 1,
            previous_count: 0,
        },
    )
    .await?;
    repo.save(
        "api:1",
        WindowState {
            window_start: now,
            count: 5,
            previous_count: 2,
        },
    )
    .await?;

    let state = repo.get("api:1").await?.unwrap();
    assert_eq!(state.count, 5);
    assert_eq!(state.previous_count, 2);

    Ok(())
}
