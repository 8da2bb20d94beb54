//! Stale issue escalation.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};

use crate::server::{
    data::{company::CompanyRepository, issue::IssueRepository, user::UserRepository},
    error::AppError,
    model::{
        company::Company,
        workflow::{Notification, NotificationKind},
    },
};

use super::WorkflowService;

/// Issues still open after this many days are escalated.
pub const STALE_ISSUE_DAYS: i64 = 7;

/// Period key of escalations; each issue is escalated once.
const ESCALATION_PERIOD: &str = "escalation";

impl<'a> WorkflowService<'a> {
    /// Notifies the company address and all active staff about issues left open
    /// for more than [`STALE_ISSUE_DAYS`].
    ///
    /// Returns the number of emails sent.
    pub(super) async fn stale_issue_escalation(
        &self,
        now: DateTime<Utc>,
    ) -> Result<u64, AppError> {
        let cutoff = now - TimeDelta::days(STALE_ISSUE_DAYS);
        let issues = IssueRepository::new(self.db)
            .get_open_created_before(cutoff)
            .await?;

        if issues.is_empty() {
            return Ok(0);
        }

        let companies: HashMap<i32, Company> = CompanyRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let users = UserRepository::new(self.db);
        let mut staff_emails: HashMap<i32, Vec<String>> = HashMap::new();
        let mut notifications = Vec::new();

        for issue in &issues {
            let Some(company) = companies.get(&issue.company_id) else {
                continue;
            };

            if !staff_emails.contains_key(&company.id) {
                let emails = users
                    .get_staff(company.id)
                    .await?
                    .into_iter()
                    .map(|u| u.email)
                    .collect();
                staff_emails.insert(company.id, emails);
            }

            let mut recipients = vec![company.email.clone()];
            for email in staff_emails.get(&company.id).into_iter().flatten() {
                if !recipients.contains(email) {
                    recipients.push(email.clone());
                }
            }

            let days_open = (now - issue.created_at).num_days();
            let subject = format!("Issue #{} has been open for {} days", issue.id, days_open);
            let text = format!(
                "The {} priority issue \"{}\" was reported on {} and is still open.",
                issue.priority,
                issue.title,
                issue.created_at.date_naive()
            );

            for recipient in recipients.into_iter().filter(|r| !r.is_empty()) {
                notifications.push(Notification {
                    company_id: company.id,
                    kind: NotificationKind::StaleIssue,
                    entity_id: issue.id,
                    period_key: ESCALATION_PERIOD.to_string(),
                    recipient,
                    subject: subject.clone(),
                    text: text.clone(),
                });
            }
        }

        Ok(self.notify_all(notifications).await)
    }
}
