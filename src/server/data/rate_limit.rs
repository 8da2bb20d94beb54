use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::rate_limit::WindowState;

/// Database store of sliding-window counters, one row per limiter key.
pub struct RateLimitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RateLimitRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, key: &str) -> Result<Option<WindowState>, DbErr> {
        let token = entity::prelude::RateLimitToken::find()
            .filter(entity::rate_limit_token::Column::Key.eq(key))
            .one(self.db)
            .await?;

        Ok(token.as_ref().map(WindowState::from_entity))
    }

    /// Inserts or replaces the counter state of `key`.
    pub async fn save(&self, key: &str, state: WindowState) -> Result<(), DbErr> {
        entity::prelude::RateLimitToken::insert(entity::rate_limit_token::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            window_start: ActiveValue::Set(state.window_start),
            count: ActiveValue::Set(state.count),
            previous_count: ActiveValue::Set(state.previous_count),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::rate_limit_token::Column::Key)
                .update_columns([
                    entity::rate_limit_token::Column::WindowStart,
                    entity::rate_limit_token::Column::Count,
                    entity::rate_limit_token::Column::PreviousCount,
                    entity::rate_limit_token::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Deletes counters last updated before `cutoff`, returning how many were removed.
    pub async fn purge_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::RateLimitToken::delete_many()
            .filter(entity::rate_limit_token::Column::UpdatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
