//! Trend report models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of change between two consecutive snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

impl TrendDirection {
    /// Exact comparison; equal values are `Stable`.
    pub fn between<T: PartialOrd>(previous: T, current: T) -> Self {
        if current > previous {
            TrendDirection::Increasing
        } else if current < previous {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trend report derived from the two most recent snapshots.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTrends {
    pub net_worth_trend: TrendDirection,
    pub net_worth_change_percent: Decimal,
    pub debt_trend: TrendDirection,
    /// Mirrors the current savings rate; not a period-over-period delta.
    pub savings_trend_percent: Decimal,
    /// Reserved for multi-period trends; always zero.
    pub income_growth_percent: Decimal,
    /// Reserved for multi-period trends; always zero.
    pub expense_growth_percent: Decimal,
}
