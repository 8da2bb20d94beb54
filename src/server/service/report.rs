//! Financial report and dashboard figures.
//!
//! Nothing is stored: every figure is computed from contracts and accepted offers
//! when it is requested.

use std::collections::HashMap;

use chrono::{Days, NaiveDate, NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        company::CompanyRepository, contract::ContractRepository, issue::IssueRepository,
        offer::OfferRepository, owner::OwnerRepository, property::PropertyRepository,
        tenant::TenantRepository,
    },
    error::AppError,
    model::{
        report::{
            Dashboard, FinancialReport, Financials, OwnerFinancials, PropertyFinancials,
            ReportPeriod,
        },
        scope::{Scope, Visibility},
    },
};

/// Contracts ending within this many days count as expiring on the dashboard.
pub const EXPIRING_WITHIN_DAYS: u64 = 30;

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes income, management fee, expenses and net per property and owner.
    ///
    /// Income is the monthly rent of every non-draft contract times the number of
    /// months of the period in which it is in force. Expenses are the accepted offers
    /// decided within the period. The fee is taken per property and rounded down.
    ///
    /// # Arguments
    /// - `scope` - Staff scope, or an owner scope which restricts the report to that
    ///   owner regardless of `owner_id`
    /// - `year` / `month` - Period; the whole year when `month` is `None`
    /// - `owner_id` - Optional owner filter for staff
    ///
    /// # Returns
    /// - `Ok(FinancialReport)` - Rows sorted by property and owner name plus totals
    /// - `Err(AppError::BadRequest)` - Invalid period
    /// - `Err(AppError::NotFound)` - Company missing
    pub async fn financial(
        &self,
        scope: &Scope,
        year: i32,
        month: Option<u32>,
        owner_id: Option<i32>,
    ) -> Result<FinancialReport, AppError> {
        let period = ReportPeriod::new(year, month)
            .ok_or_else(|| AppError::BadRequest("Invalid report period".to_string()))?;
        let (Some(start), Some(end)) = (period.start(), period.end()) else {
            return Err(AppError::BadRequest("Invalid report period".to_string()));
        };

        let company = CompanyRepository::new(self.db)
            .find_by_id(scope.company_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company {} not found", scope.company_id)))?;
        let fee_bps = company.management_fee_bps;

        let owner_filter = match scope.visibility {
            Visibility::Owner(id) => Some(id),
            _ => owner_id,
        };

        let properties: Vec<_> = PropertyRepository::new(self.db)
            .get_all(scope)
            .await?
            .into_iter()
            .filter(|p| owner_filter.is_none_or(|id| p.owner_id == id))
            .collect();

        let mut income: HashMap<i32, i64> = HashMap::new();
        for contract in ContractRepository::new(self.db)
            .get_in_force(scope.company_id)
            .await?
        {
            let months = period.months_in_force(&contract);
            if months > 0 {
                *income.entry(contract.property_id).or_default() +=
                    contract.monthly_rent_cents * months;
            }
        }

        let mut expenses: HashMap<i32, i64> = HashMap::new();
        for offer in OfferRepository::new(self.db)
            .get_accepted_between(scope.company_id, day_start(start), day_start(next_day(end)))
            .await?
        {
            if let Some(property_id) = offer.property_id {
                *expenses.entry(property_id).or_default() += offer.amount_cents;
            }
        }

        let owner_names: HashMap<i32, String> = OwnerRepository::new(self.db)
            .get_all(scope.company_id)
            .await?
            .into_iter()
            .map(|o| (o.id, o.name))
            .collect();

        let mut totals = Financials::default();
        let mut per_owner: HashMap<i32, Financials> = HashMap::new();
        let mut property_rows = Vec::with_capacity(properties.len());

        for property in properties {
            let financials = Financials::new(
                income.get(&property.id).copied().unwrap_or(0),
                expenses.get(&property.id).copied().unwrap_or(0),
                fee_bps,
            );

            totals.add(&financials, fee_bps);
            per_owner
                .entry(property.owner_id)
                .or_default()
                .add(&financials, fee_bps);

            property_rows.push(PropertyFinancials {
                property_id: property.id,
                property_name: property.name,
                owner_id: property.owner_id,
                financials,
            });
        }

        property_rows.sort_by(|a, b| {
            a.property_name
                .cmp(&b.property_name)
                .then(a.property_id.cmp(&b.property_id))
        });

        let mut owner_rows: Vec<OwnerFinancials> = per_owner
            .into_iter()
            .map(|(owner_id, financials)| OwnerFinancials {
                owner_id,
                owner_name: owner_names.get(&owner_id).cloned().unwrap_or_default(),
                financials,
            })
            .collect();
        owner_rows.sort_by(|a, b| {
            a.owner_name
                .cmp(&b.owner_name)
                .then(a.owner_id.cmp(&b.owner_id))
        });

        Ok(FinancialReport {
            period,
            management_fee_bps: fee_bps,
            properties: property_rows,
            owners: owner_rows,
            totals,
        })
    }

    /// Counts shown on the dashboard, limited to what `scope` may see.
    ///
    /// Owner and tenant totals are only reported to staff.
    pub async fn dashboard(&self, scope: &Scope) -> Result<Dashboard, AppError> {
        let today = Utc::now().date_naive();
        let expiring_by = today
            .checked_add_days(Days::new(EXPIRING_WITHIN_DAYS))
            .unwrap_or(today);

        let contracts = ContractRepository::new(self.db);

        let (owners, tenants) = if scope.is_company() {
            (
                OwnerRepository::new(self.db).count(scope.company_id).await?,
                TenantRepository::new(self.db).count(scope.company_id).await?,
            )
        } else {
            (0, 0)
        };

        Ok(Dashboard {
            properties: PropertyRepository::new(self.db).count(scope).await?,
            owners,
            tenants,
            active_contracts: contracts.count_active(scope, None).await?,
            open_issues: IssueRepository::new(self.db).count_open(scope).await?,
            pending_offers: OfferRepository::new(self.db).count_pending(scope).await?,
            expiring_contracts: contracts.count_active(scope, Some((today, expiring_by))).await?,
        })
    }
}

fn day_start(date: NaiveDate) -> chrono::DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}
