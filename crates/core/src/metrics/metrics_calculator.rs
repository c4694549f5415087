//! KPI calculation.
//!
//! Every ratio has a defined zero-denominator policy: the result is zero
//! rather than an error or NaN. Negative net worth yields
//! [`DebtToWorthRatio::Unbounded`].

use log::{debug, warn};
use rust_decimal::Decimal;

use super::metrics_model::{DebtToWorthRatio, KpiMetrics};
use crate::aggregation::{AssetBreakdown, LedgerTotals};
use crate::constants::PERCENT;
use crate::snapshots::NetWorthSnapshot;

/// `numerator / denominator`, or zero when the denominator is zero.
///
/// A quotient past `Decimal`'s range clamps to `Decimal::MAX`/`Decimal::MIN`.
pub(crate) fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// `numerator / denominator * 100`, or zero when the denominator is zero.
pub(crate) fn percent_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    ratio_or_zero(numerator, denominator).saturating_mul(PERCENT)
}

/// Percent change from `previous` to `current`; zero when `previous` is zero.
pub(crate) fn percent_change(previous: Decimal, current: Decimal) -> Decimal {
    percent_or_zero(current.saturating_sub(previous), previous)
}

pub struct MetricsCalculator;

impl MetricsCalculator {
    pub fn debt_to_income_ratio(totals: &LedgerTotals) -> Decimal {
        percent_or_zero(totals.monthly_debt_payments, totals.monthly_income)
    }

    pub fn debt_to_worth_ratio(totals: &LedgerTotals) -> DebtToWorthRatio {
        if totals.net_worth < Decimal::ZERO {
            warn!(
                "Net worth is negative ({}); debt-to-worth ratio is unbounded",
                totals.net_worth
            );
            return DebtToWorthRatio::Unbounded;
        }
        DebtToWorthRatio::Finite(percent_or_zero(totals.total_liabilities, totals.net_worth))
    }

    pub fn savings_rate(totals: &LedgerTotals) -> Decimal {
        percent_or_zero(totals.monthly_net_income, totals.monthly_income)
    }

    pub fn liquidity_ratio(totals: &LedgerTotals) -> Decimal {
        ratio_or_zero(totals.liquid_assets, totals.monthly_expenses)
    }

    /// Same runway figure as the liquidity ratio, reported in months.
    pub fn emergency_fund_months(totals: &LedgerTotals) -> Decimal {
        Self::liquidity_ratio(totals)
    }

    pub fn investment_ratio(totals: &LedgerTotals) -> Decimal {
        percent_or_zero(totals.investment_assets, totals.total_assets)
    }

    /// Percent change between the last two snapshots, zero with fewer than two.
    pub fn net_worth_growth_rate(history: &[NetWorthSnapshot]) -> Decimal {
        match history {
            [.., previous, current] => percent_change(previous.net_worth(), current.net_worth()),
            _ => Decimal::ZERO,
        }
    }

    pub fn asset_allocation(totals: &LedgerTotals) -> AssetBreakdown {
        let total = totals.total_assets;
        totals
            .asset_breakdown
            .map(|value| percent_or_zero(value, total))
    }

    /// Computes the full KPI set from fresh totals and the snapshot history.
    pub fn calculate(totals: &LedgerTotals, history: &[NetWorthSnapshot]) -> KpiMetrics {
        let metrics = KpiMetrics {
            debt_to_income_ratio: Self::debt_to_income_ratio(totals),
            debt_to_worth_ratio: Self::debt_to_worth_ratio(totals),
            savings_rate: Self::savings_rate(totals),
            liquidity_ratio: Self::liquidity_ratio(totals),
            investment_ratio: Self::investment_ratio(totals),
            net_worth_growth_rate: Self::net_worth_growth_rate(history),
            emergency_fund_months: Self::emergency_fund_months(totals),
            asset_allocation: Self::asset_allocation(totals),
        };
        debug!(
            "Calculated KPIs: dti={} savings_rate={} liquidity={}",
            metrics.debt_to_income_ratio, metrics.savings_rate, metrics.liquidity_ratio
        );
        metrics
    }
}
