//! KPI domain models.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregation::AssetBreakdown;

/// Liabilities as a percentage of net worth.
///
/// `Unbounded` marks negative net worth (insolvency). It is a defined result,
/// not a computation error, and callers must handle it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DebtToWorthRatio {
    Finite(Decimal),
    Unbounded,
}

impl DebtToWorthRatio {
    pub fn is_unbounded(&self) -> bool {
        matches!(self, DebtToWorthRatio::Unbounded)
    }

    pub fn finite(&self) -> Option<Decimal> {
        match self {
            DebtToWorthRatio::Finite(value) => Some(*value),
            DebtToWorthRatio::Unbounded => None,
        }
    }

    /// Float view of the ratio; `Unbounded` maps to `f64::INFINITY`.
    ///
    /// A finite ratio always maps to a finite float, never NaN.
    pub fn to_f64(&self) -> f64 {
        match self {
            DebtToWorthRatio::Finite(value) => value.to_f64().unwrap_or(f64::MAX),
            DebtToWorthRatio::Unbounded => f64::INFINITY,
        }
    }
}

impl Default for DebtToWorthRatio {
    fn default() -> Self {
        DebtToWorthRatio::Finite(Decimal::ZERO)
    }
}

/// Key performance indicators derived from the ledger and snapshot history.
///
/// All percentages are on a 0-100 scale. Never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiMetrics {
    /// Monthly debt payments / monthly income, in percent
    pub debt_to_income_ratio: Decimal,
    pub debt_to_worth_ratio: DebtToWorthRatio,
    /// Monthly net income / monthly income, in percent
    pub savings_rate: Decimal,
    /// Liquid assets / monthly expenses
    pub liquidity_ratio: Decimal,
    /// Invested assets / total assets, in percent
    pub investment_ratio: Decimal,
    /// Net worth change between the two latest snapshots, in percent
    pub net_worth_growth_rate: Decimal,
    /// Months of expenses covered by liquid assets
    pub emergency_fund_months: Decimal,
    /// Share of total assets per category, in percent
    pub asset_allocation: AssetBreakdown,
}
