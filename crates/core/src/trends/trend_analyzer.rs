use rust_decimal::Decimal;

use super::trends_model::{FinancialTrends, TrendDirection};
use crate::metrics::percent_change;
use crate::snapshots::NetWorthSnapshot;

pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Compares the last two snapshots of `history`.
    ///
    /// With fewer than two snapshots the report is neutral: stable directions
    /// and every percentage zero.
    pub fn analyze(history: &[NetWorthSnapshot], savings_rate: Decimal) -> FinancialTrends {
        let [.., previous, current] = history else {
            return FinancialTrends::default();
        };

        FinancialTrends {
            net_worth_trend: TrendDirection::between(previous.net_worth(), current.net_worth()),
            net_worth_change_percent: percent_change(previous.net_worth(), current.net_worth()),
            debt_trend: TrendDirection::between(
                previous.total_liabilities(),
                current.total_liabilities(),
            ),
            savings_trend_percent: savings_rate,
            income_growth_percent: Decimal::ZERO,
            expense_growth_percent: Decimal::ZERO,
        }
    }
}
