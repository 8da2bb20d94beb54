//! Housekeeping steps without notifications.

use chrono::{DateTime, Utc};

use crate::server::{
    data::{offer::OfferRepository, rate_limit::RateLimitRepository},
    error::AppError,
};

use super::WorkflowService;

impl<'a> WorkflowService<'a> {
    /// Expires sent offers whose validity ended before today
    pub(super) async fn expire_offers(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        Ok(OfferRepository::new(self.db)
            .expire_sent_before(now.date_naive())
            .await?)
    }

    /// Deletes rate limit rows idle for longer than the retention
    pub(super) async fn purge_rate_limits(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        Ok(RateLimitRepository::new(self.db)
            .purge_before(now - self.rate_limit_retention)
            .await?)
    }
}
