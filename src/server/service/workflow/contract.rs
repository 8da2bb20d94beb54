//! Contract expiry and reminder steps.

use chrono::{DateTime, Datelike, Days, Utc};

use crate::{
    model::api::format_cents,
    server::{
        data::{
            contract::ContractRepository, owner::OwnerRepository, property::PropertyRepository,
            tenant::TenantRepository,
        },
        error::AppError,
        model::{
            contract::Contract,
            owner::Owner,
            property::Property,
            scope::Scope,
            tenant::Tenant,
            workflow::{Notification, NotificationKind},
        },
        util::parse::month_key,
    },
};

use super::WorkflowService;

/// Contracts ending within this many days get an expiry reminder.
pub const EXPIRY_REMINDER_DAYS: u64 = 30;

/// Property, owner and tenant of a contract, as far as they still exist.
struct ContractParties {
    property: Option<Property>,
    owner: Option<Owner>,
    tenant: Option<Tenant>,
}

impl ContractParties {
    fn property_name(&self) -> &str {
        self.property.as_ref().map_or("your property", |p| p.name.as_str())
    }

    fn owner_email(&self) -> Option<&str> {
        self.owner.as_ref().and_then(|o| o.email.as_deref())
    }

    fn tenant_email(&self) -> Option<&str> {
        self.tenant.as_ref().and_then(|t| t.email.as_deref())
    }
}

impl<'a> WorkflowService<'a> {
    /// Expires active contracts whose end date has passed and tells the owner.
    ///
    /// The owner notices are prepared before any status changes, so a failed
    /// lookup leaves the contracts active for the next run.
    ///
    /// Returns the number of contracts expired.
    pub(super) async fn expire_contracts(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let today = now.date_naive();
        let repo = ContractRepository::new(self.db);

        let contracts = repo.get_active_ended_before(today).await?;

        let mut notifications = Vec::new();
        for contract in &contracts {
            let parties = self.parties(contract).await?;
            let Some(owner_email) = parties.owner_email() else {
                continue;
            };
            let end_date = contract.end_date.map(|d| d.to_string()).unwrap_or_default();

            notifications.push(Notification {
                company_id: contract.company_id,
                kind: NotificationKind::ContractExpired,
                entity_id: contract.id,
                period_key: end_date.clone(),
                recipient: owner_email.to_string(),
                subject: format!("Contract for {} has expired", parties.property_name()),
                text: format!(
                    "The rental contract #{} for {} ended on {} and has been marked as expired.",
                    contract.id,
                    parties.property_name(),
                    end_date
                ),
            });
        }

        let ids: Vec<i32> = contracts.iter().map(|c| c.id).collect();
        let expired = repo.expire(&ids).await?;

        self.notify_all(notifications).await;

        Ok(expired)
    }

    /// Reminds tenant and owner once per end date of a contract ending soon.
    ///
    /// Returns the number of emails sent.
    pub(super) async fn contract_expiry_reminders(
        &self,
        now: DateTime<Utc>,
    ) -> Result<u64, AppError> {
        let today = now.date_naive();
        let until = today
            .checked_add_days(Days::new(EXPIRY_REMINDER_DAYS))
            .unwrap_or(today);

        let contracts = ContractRepository::new(self.db)
            .get_active_ending_between(today, until)
            .await?;

        let mut notifications = Vec::new();
        for contract in &contracts {
            let Some(end_date) = contract.end_date else {
                continue;
            };
            let parties = self.parties(contract).await?;

            let subject = format!(
                "Contract for {} ends on {}",
                parties.property_name(),
                end_date
            );
            let text = format!(
                "The rental contract #{} for {} ends on {}. Please get in touch if it should be renewed.",
                contract.id,
                parties.property_name(),
                end_date
            );

            for recipient in [parties.tenant_email(), parties.owner_email()]
                .into_iter()
                .flatten()
            {
                notifications.push(Notification {
                    company_id: contract.company_id,
                    kind: NotificationKind::ContractExpiring,
                    entity_id: contract.id,
                    period_key: end_date.to_string(),
                    recipient: recipient.to_string(),
                    subject: subject.clone(),
                    text: text.clone(),
                });
            }
        }

        Ok(self.notify_all(notifications).await)
    }

    /// Reminds tenants whose payment day is today, once per month.
    ///
    /// Returns the number of emails sent.
    pub(super) async fn rent_due_reminders(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let today = now.date_naive();

        let contracts = ContractRepository::new(self.db)
            .get_active_by_payment_day(today.day() as i32)
            .await?;

        let mut notifications = Vec::new();
        for contract in contracts.iter().filter(|c| c.overlaps(today, today)) {
            let parties = self.parties(contract).await?;
            let Some(tenant_email) = parties.tenant_email() else {
                continue;
            };

            notifications.push(Notification {
                company_id: contract.company_id,
                kind: NotificationKind::RentDue,
                entity_id: contract.id,
                period_key: month_key(today),
                recipient: tenant_email.to_string(),
                subject: format!("Rent for {} is due today", parties.property_name()),
                text: format!(
                    "This is a reminder that the monthly rent of {} for {} is due today.",
                    format_cents(contract.monthly_rent_cents),
                    parties.property_name()
                ),
            });
        }

        Ok(self.notify_all(notifications).await)
    }

    async fn parties(&self, contract: &Contract) -> Result<ContractParties, AppError> {
        let property = PropertyRepository::new(self.db)
            .find_by_id(&Scope::company(contract.company_id), contract.property_id)
            .await?;

        let owner = match &property {
            Some(property) => {
                OwnerRepository::new(self.db)
                    .find_by_id(contract.company_id, property.owner_id)
                    .await?
            }
            None => None,
        };

        let tenant = TenantRepository::new(self.db)
            .find_by_id(contract.company_id, contract.tenant_id)
            .await?;

        Ok(ContractParties {
            property,
            owner,
            tenant,
        })
    }
}
