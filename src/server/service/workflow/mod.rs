//! Daily workflow automation.
//!
//! A run walks the contracts, issues and offers of every company and performs the
//! steps listed in [`WorkflowStep::ALL`]. Steps are independent: a failing step is
//! logged and recorded in the run summary while the remaining steps still run.
//!
//! Emails are de-duplicated through `workflow_notification` rows keyed by kind,
//! entity, period and recipient, so running the workflow several times a day (e.g.
//! the scheduled run plus a manual trigger) never sends the same email twice.

mod contract;
mod issue;
mod maintenance;

use chrono::{DateTime, TimeDelta, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::workflow_notification::WorkflowNotificationRepository,
    error::AppError,
    model::workflow::{Notification, StepOutcome, WorkflowRun, WorkflowStep},
    service::email::EmailService,
};

pub struct WorkflowService<'a> {
    db: &'a DatabaseConnection,
    email: &'a EmailService,
    /// Rate limit rows not updated for this long are purged.
    rate_limit_retention: TimeDelta,
}

impl<'a> WorkflowService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        email: &'a EmailService,
        rate_limit_retention: TimeDelta,
    ) -> Self {
        Self {
            db,
            email,
            rate_limit_retention,
        }
    }

    /// Runs every step for the current time.
    pub async fn run(&self) -> WorkflowRun {
        self.run_at(Utc::now()).await
    }

    /// Runs every step as if the current time were `now`.
    ///
    /// # Returns
    /// Summary with one outcome per step, in execution order. Failed steps carry
    /// the error message and a processed count of 0.
    pub async fn run_at(&self, now: DateTime<Utc>) -> WorkflowRun {
        let mut run = WorkflowRun::default();

        for step in WorkflowStep::ALL {
            let result = match step {
                WorkflowStep::ExpireContracts => self.expire_contracts(now).await,
                WorkflowStep::ContractExpiryReminders => {
                    self.contract_expiry_reminders(now).await
                }
                WorkflowStep::RentDueReminders => self.rent_due_reminders(now).await,
                WorkflowStep::StaleIssueEscalation => self.stale_issue_escalation(now).await,
                WorkflowStep::ExpireOffers => self.expire_offers(now).await,
                WorkflowStep::PurgeRateLimits => self.purge_rate_limits(now).await,
            };

            let outcome = match result {
                Ok(processed) => {
                    tracing::info!("Workflow step {} processed {}", step, processed);
                    StepOutcome {
                        step,
                        processed,
                        error: None,
                    }
                }
                Err(e) => {
                    tracing::error!("Workflow step {} failed: {}", step, e);
                    StepOutcome {
                        step,
                        processed: 0,
                        error: Some(e.to_string()),
                    }
                }
            };

            run.steps.push(outcome);
        }

        run
    }

    /// Sends a notification unless it was already sent.
    ///
    /// # Returns
    /// - `Ok(true)` - Email sent and recorded
    /// - `Ok(false)` - Already sent earlier
    /// - `Err(AppError)` - Sending or recording failed
    async fn notify(&self, notification: &Notification) -> Result<bool, AppError> {
        let repo = WorkflowNotificationRepository::new(self.db);

        if repo.exists(notification).await? {
            return Ok(false);
        }

        self.email
            .send(
                &notification.recipient,
                &notification.subject,
                &notification.text,
            )
            .await?;
        repo.record(notification).await?;

        Ok(true)
    }

    /// Sends a batch of notifications, logging and skipping individual failures.
    ///
    /// Returns the number of emails sent.
    async fn notify_all(&self, notifications: Vec<Notification>) -> u64 {
        let mut sent = 0;

        for notification in notifications {
            match self.notify(&notification).await {
                Ok(true) => sent += 1,
                Ok(false) => {}
                Err(e) => tracing::warn!(
                    "Failed to send {} notification for {} to {}: {}",
                    notification.kind.as_str(),
                    notification.entity_id,
                    notification.recipient,
                    e
                ),
            }
        }

        sent
    }
}
