//! Totals and breakdowns over the current ledger contents.
//!
//! Everything here is a pure function of the entity slices it is given.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::breakdown::{AssetBreakdown, LiabilityBreakdown};
use crate::constants::MONTHS_PER_YEAR;
use crate::ledger::{Asset, ExpenseCategory, IncomeStream, LedgerStore, Liability};

/// Sum that clamps at `Decimal::MAX`/`Decimal::MIN` instead of overflowing.
pub(crate) fn saturating_sum<I: IntoIterator<Item = Decimal>>(amounts: I) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, Decimal::saturating_add)
}

pub fn total_assets(assets: &[Asset]) -> Decimal {
    saturating_sum(assets.iter().map(|a| a.value))
}

pub fn total_liabilities(liabilities: &[Liability]) -> Decimal {
    saturating_sum(liabilities.iter().map(|l| l.balance))
}

pub fn net_worth(assets: &[Asset], liabilities: &[Liability]) -> Decimal {
    total_assets(assets).saturating_sub(total_liabilities(liabilities))
}

pub fn asset_breakdown(assets: &[Asset]) -> AssetBreakdown {
    AssetBreakdown::from_amounts(assets.iter().map(|a| (a.category, a.value)))
}

pub fn liability_breakdown(liabilities: &[Liability]) -> LiabilityBreakdown {
    LiabilityBreakdown::from_amounts(liabilities.iter().map(|l| (l.category, l.balance)))
}

/// Checking plus savings.
pub fn liquid_assets(assets: &[Asset]) -> Decimal {
    saturating_sum(
        assets
            .iter()
            .filter(|a| a.category.is_liquid())
            .map(|a| a.value),
    )
}

/// Investment, retirement and cryptocurrency holdings.
pub fn investment_assets(assets: &[Asset]) -> Decimal {
    saturating_sum(
        assets
            .iter()
            .filter(|a| a.category.is_invested())
            .map(|a| a.value),
    )
}

pub fn total_monthly_debt_payments(liabilities: &[Liability]) -> Decimal {
    saturating_sum(liabilities.iter().map(|l| l.monthly_payment))
}

/// Sum over active streams only.
pub fn total_monthly_income(income_streams: &[IncomeStream]) -> Decimal {
    saturating_sum(
        income_streams
            .iter()
            .filter(|i| i.is_active)
            .map(|i| i.monthly_amount),
    )
}

/// Sum over every expense, recurring or not.
pub fn total_monthly_expenses(expenses: &[ExpenseCategory]) -> Decimal {
    saturating_sum(expenses.iter().map(|e| e.monthly_amount))
}

/// Every aggregate the calculators need, computed once per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTotals {
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
    pub liquid_assets: Decimal,
    pub investment_assets: Decimal,
    pub monthly_debt_payments: Decimal,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    pub monthly_net_income: Decimal,
    pub projected_annual_savings: Decimal,
    pub asset_breakdown: AssetBreakdown,
    pub liability_breakdown: LiabilityBreakdown,
}

impl LedgerTotals {
    pub fn from_ledger(ledger: &LedgerStore) -> Self {
        let assets = ledger.assets();
        let liabilities = ledger.liabilities();

        let total_assets = total_assets(assets);
        let total_liabilities = total_liabilities(liabilities);
        let monthly_income = total_monthly_income(ledger.income_streams());
        let monthly_expenses = total_monthly_expenses(ledger.expenses());
        let monthly_net_income = monthly_income.saturating_sub(monthly_expenses);

        Self {
            total_assets,
            total_liabilities,
            net_worth: total_assets.saturating_sub(total_liabilities),
            liquid_assets: liquid_assets(assets),
            investment_assets: investment_assets(assets),
            monthly_debt_payments: total_monthly_debt_payments(liabilities),
            monthly_income,
            monthly_expenses,
            monthly_net_income,
            projected_annual_savings: monthly_net_income.saturating_mul(MONTHS_PER_YEAR),
            asset_breakdown: asset_breakdown(assets),
            liability_breakdown: liability_breakdown(liabilities),
        }
    }
}
