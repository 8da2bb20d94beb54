use chrono::NaiveDate;

use crate::{
    model::report::{
        DashboardDto, FinancialReportDto, FinancialTotalsDto, OwnerFinancialsDto,
        PropertyFinancialsDto,
    },
    server::{model::contract::Contract, util::parse::month_bounds},
};

/// Inclusive date range a financial report covers, split into calendar months.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPeriod {
    pub year: i32,
    pub month: Option<u32>,
    /// `(first_day, last_day)` of each month in the period.
    pub months: Vec<(NaiveDate, NaiveDate)>,
}

impl ReportPeriod {
    /// A single month when `month` is given, otherwise the whole year.
    ///
    /// Returns `None` for a month outside 1..=12 or a year chrono cannot represent.
    pub fn new(year: i32, month: Option<u32>) -> Option<Self> {
        let months = match month {
            Some(month) => vec![month_bounds(year, month)?],
            None => (1..=12)
                .map(|month| month_bounds(year, month))
                .collect::<Option<Vec<_>>>()?,
        };

        Some(Self {
            year,
            month,
            months,
        })
    }

    /// Number of months in the period during which the contract is in force.
    pub fn months_in_force(&self, contract: &Contract) -> i64 {
        self.months
            .iter()
            .filter(|(first, last)| contract.overlaps(*first, *last))
            .count() as i64
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.months.first().map(|(first, _)| *first)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.months.last().map(|(_, last)| *last)
    }
}

/// Income, fee and expense sums.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Financials {
    pub income_cents: i64,
    pub management_fee_cents: i64,
    pub expenses_cents: i64,
}

impl Financials {
    /// Builds the sums for one property; the fee is rounded down.
    pub fn new(income_cents: i64, expenses_cents: i64, management_fee_bps: i32) -> Self {
        Self {
            income_cents,
            management_fee_cents: management_fee(income_cents, management_fee_bps),
            expenses_cents,
        }
    }

    pub fn net_cents(&self) -> i64 {
        self.income_cents - self.management_fee_cents - self.expenses_cents
    }

    /// Adds the income and expenses of `other`.
    ///
    /// The fee is recomputed from the summed income rather than summed, so an
    /// aggregate row is charged exactly `income × bps / 10_000`.
    pub fn add(&mut self, other: &Financials, management_fee_bps: i32) {
        self.income_cents += other.income_cents;
        self.expenses_cents += other.expenses_cents;
        self.management_fee_cents = management_fee(self.income_cents, management_fee_bps);
    }
}

fn management_fee(income_cents: i64, management_fee_bps: i32) -> i64 {
    income_cents * i64::from(management_fee_bps) / 10_000
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyFinancials {
    pub property_id: i32,
    pub property_name: String,
    pub owner_id: i32,
    pub financials: Financials,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OwnerFinancials {
    pub owner_id: i32,
    pub owner_name: String,
    pub financials: Financials,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialReport {
    pub period: ReportPeriod,
    pub management_fee_bps: i32,
    pub properties: Vec<PropertyFinancials>,
    pub owners: Vec<OwnerFinancials>,
    pub totals: Financials,
}

impl FinancialReport {
    pub fn into_dto(self) -> FinancialReportDto {
        FinancialReportDto {
            year: self.period.year,
            month: self.period.month,
            management_fee_bps: self.management_fee_bps,
            properties: self
                .properties
                .into_iter()
                .map(|p| PropertyFinancialsDto {
                    property_id: p.property_id,
                    property_name: p.property_name,
                    owner_id: p.owner_id,
                    income_cents: p.financials.income_cents,
                    management_fee_cents: p.financials.management_fee_cents,
                    expenses_cents: p.financials.expenses_cents,
                    net_cents: p.financials.net_cents(),
                })
                .collect(),
            owners: self
                .owners
                .into_iter()
                .map(|o| OwnerFinancialsDto {
                    owner_id: o.owner_id,
                    owner_name: o.owner_name,
                    income_cents: o.financials.income_cents,
                    management_fee_cents: o.financials.management_fee_cents,
                    expenses_cents: o.financials.expenses_cents,
                    net_cents: o.financials.net_cents(),
                })
                .collect(),
            totals: FinancialTotalsDto {
                income_cents: self.totals.income_cents,
                management_fee_cents: self.totals.management_fee_cents,
                expenses_cents: self.totals.expenses_cents,
                net_cents: self.totals.net_cents(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub properties: u64,
    pub owners: u64,
    pub tenants: u64,
    pub active_contracts: u64,
    pub open_issues: u64,
    pub pending_offers: u64,
    pub expiring_contracts: u64,
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            properties: self.properties,
            owners: self.owners,
            tenants: self.tenants,
            active_contracts: self.active_contracts,
            open_issues: self.open_issues,
            pending_offers: self.pending_offers,
            expiring_contracts: self.expiring_contracts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_month_and_year_periods() {
        let march = ReportPeriod::new(2025, Some(3)).unwrap();
        assert_eq!(march.months.len(), 1);
        assert_eq!(march.start(), NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(march.end(), NaiveDate::from_ymd_opt(2025, 3, 31));

        let year = ReportPeriod::new(2024, None).unwrap();
        assert_eq!(year.months.len(), 12);
        assert_eq!(year.end(), NaiveDate::from_ymd_opt(2024, 12, 31));

        assert!(ReportPeriod::new(2025, Some(0)).is_none());
        assert!(ReportPeriod::new(2025, Some(13)).is_none());
    }

    #[test]
    fn fee_rounds_down_and_net_subtracts_everything() {
        let f = Financials::new(123_456, 10_000, 850);

        // 123_456 * 850 / 10_000 = 10_493.76
        assert_eq!(f.management_fee_cents, 10_493);
        assert_eq!(f.net_cents(), 123_456 - 10_493 - 10_000);
    }

    #[test]
    fn sums_financials() {
        let mut total = Financials::default();
        total.add(&Financials::new(100_000, 0, 1000), 1000);
        total.add(&Financials::new(50_000, 20_000, 1000), 1000);

        assert_eq!(total.income_cents, 150_000);
        assert_eq!(total.management_fee_cents, 15_000);
        assert_eq!(total.expenses_cents, 20_000);
        assert_eq!(total.net_cents(), 115_000);
    }

    #[test]
    fn summed_fee_is_computed_from_summed_income() {
        let mut total = Financials::default();
        // Each property alone: 1_999 * 500 / 10_000 = 99.95, rounded to 99
        for _ in 0..3 {
            total.add(&Financials::new(1_999, 0, 500), 500);
        }

        // 5_997 * 500 / 10_000 = 299.85
        assert_eq!(total.income_cents, 5_997);
        assert_eq!(total.management_fee_cents, 299);
        assert_eq!(total.net_cents(), 5_997 - 299);
    }
}
