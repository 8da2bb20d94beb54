use std::fmt;

use crate::model::workflow::{WorkflowRunDto, WorkflowStepDto};

/// Steps of the daily workflow run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    ExpireContracts,
    ContractExpiryReminders,
    RentDueReminders,
    StaleIssueEscalation,
    ExpireOffers,
    PurgeRateLimits,
}

impl WorkflowStep {
    pub const ALL: [WorkflowStep; 6] = [
        WorkflowStep::ExpireContracts,
        WorkflowStep::ContractExpiryReminders,
        WorkflowStep::RentDueReminders,
        WorkflowStep::StaleIssueEscalation,
        WorkflowStep::ExpireOffers,
        WorkflowStep::PurgeRateLimits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStep::ExpireContracts => "expire_contracts",
            WorkflowStep::ContractExpiryReminders => "contract_expiry_reminders",
            WorkflowStep::RentDueReminders => "rent_due_reminders",
            WorkflowStep::StaleIssueEscalation => "stale_issue_escalation",
            WorkflowStep::ExpireOffers => "expire_offers",
            WorkflowStep::PurgeRateLimits => "purge_rate_limits",
        }
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of notification, used as the de-duplication key in `workflow_notification`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    ContractExpired,
    ContractExpiring,
    RentDue,
    StaleIssue,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::ContractExpired => "contract_expired",
            NotificationKind::ContractExpiring => "contract_expiring",
            NotificationKind::RentDue => "rent_due",
            NotificationKind::StaleIssue => "stale_issue",
        }
    }
}

/// Outcome of a single step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub step: WorkflowStep,
    pub processed: u64,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowRun {
    pub steps: Vec<StepOutcome>,
}

impl WorkflowRun {
    /// Processed count of a step, 0 when the step did not run.
    pub fn processed(&self, step: WorkflowStep) -> u64 {
        self.steps
            .iter()
            .find(|s| s.step == step)
            .map(|s| s.processed)
            .unwrap_or(0)
    }

    pub fn into_dto(self) -> WorkflowRunDto {
        WorkflowRunDto {
            steps: self
                .steps
                .into_iter()
                .map(|s| WorkflowStepDto {
                    step: s.step.as_str().to_string(),
                    processed: s.processed,
                    error: s.error,
                })
                .collect(),
        }
    }
}

/// An email to send for a workflow notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub company_id: i32,
    pub kind: NotificationKind,
    pub entity_id: i32,
    pub period_key: String,
    pub recipient: String,
    pub subject: String,
    pub text: String,
}
