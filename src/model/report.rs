use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialReportQuery {
    pub year: i32,
    /// 1-12; the whole year when absent.
    pub month: Option<u32>,
    pub owner_id: Option<i32>,
}

/// Income, fees and expenses of one property over the report period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PropertyFinancialsDto {
    pub property_id: i32,
    pub property_name: String,
    pub owner_id: i32,
    pub income_cents: i64,
    pub management_fee_cents: i64,
    pub expenses_cents: i64,
    pub net_cents: i64,
}

/// Sums over the owner's properties. The fee is charged on the summed income, so
/// it can exceed the sum of the per-property fees by rounding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct OwnerFinancialsDto {
    pub owner_id: i32,
    pub owner_name: String,
    pub income_cents: i64,
    pub management_fee_cents: i64,
    pub expenses_cents: i64,
    pub net_cents: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FinancialTotalsDto {
    pub income_cents: i64,
    pub management_fee_cents: i64,
    pub expenses_cents: i64,
    pub net_cents: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FinancialReportDto {
    pub year: i32,
    pub month: Option<u32>,
    pub management_fee_bps: i32,
    pub properties: Vec<PropertyFinancialsDto>,
    pub owners: Vec<OwnerFinancialsDto>,
    pub totals: FinancialTotalsDto,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DashboardDto {
    pub properties: u64,
    pub owners: u64,
    pub tenants: u64,
    pub active_contracts: u64,
    pub open_issues: u64,
    pub pending_offers: u64,
    pub expiring_contracts: u64,
}
