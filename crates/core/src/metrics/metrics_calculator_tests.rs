//! Unit tests for the KPI calculator.

use super::*;
use crate::aggregation::LedgerTotals;
use crate::constants::MAX_AMOUNT;
use crate::ledger::{AssetCategory, LedgerStore, LiabilityCategory};
use crate::testing::{asset, expense, income, liability, snapshot};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn totals_of(ledger: &LedgerStore) -> LedgerTotals {
    LedgerTotals::from_ledger(ledger)
}

/// checking 5000, savings 10000, mortgage 200000 @ 1200/mo, income 6000, expenses 4000
fn mortgage_scenario() -> LedgerStore {
    let mut ledger = LedgerStore::new();
    ledger
        .add_asset(asset("chk", AssetCategory::Checking, dec!(5000)))
        .unwrap();
    ledger
        .add_asset(asset("sav", AssetCategory::Savings, dec!(10000)))
        .unwrap();
    ledger
        .add_liability(liability("home", LiabilityCategory::Mortgage, dec!(200000), dec!(1200)))
        .unwrap();
    ledger.add_income(income("job", dec!(6000), true)).unwrap();
    ledger.add_expense(expense("living", dec!(4000))).unwrap();
    ledger
}

#[test]
fn test_mortgage_scenario_metrics() {
    let ledger = mortgage_scenario();
    let totals = totals_of(&ledger);
    let metrics = MetricsCalculator::calculate(&totals, &[]);

    assert_eq!(totals.total_assets, dec!(15000));
    assert_eq!(totals.total_liabilities, dec!(200000));
    assert_eq!(totals.net_worth, dec!(-185000));
    assert_eq!(totals.monthly_net_income, dec!(2000));
    assert_eq!(metrics.debt_to_income_ratio, dec!(20));
    assert_eq!(metrics.liquidity_ratio, dec!(3.75));
    assert_eq!(metrics.emergency_fund_months, dec!(3.75));
    assert_eq!(metrics.debt_to_worth_ratio, DebtToWorthRatio::Unbounded);
    assert_eq!(metrics.debt_to_worth_ratio.to_f64(), f64::INFINITY);
    assert_eq!(metrics.investment_ratio, Decimal::ZERO);
}

#[test]
fn test_no_income_yields_zero_ratios() {
    let mut ledger = LedgerStore::new();
    ledger.add_expense(expense("rent", dec!(1000))).unwrap();
    let metrics = MetricsCalculator::calculate(&totals_of(&ledger), &[]);

    assert_eq!(metrics.savings_rate, Decimal::ZERO);
    assert_eq!(metrics.debt_to_income_ratio, Decimal::ZERO);
    assert_eq!(metrics.liquidity_ratio, Decimal::ZERO);
}

#[test]
fn test_inactive_income_counts_as_no_income() {
    let mut ledger = LedgerStore::new();
    ledger.add_income(income("paused", dec!(3000), false)).unwrap();
    ledger
        .add_liability(liability("car", LiabilityCategory::CarLoan, dec!(9000), dec!(400)))
        .unwrap();

    let totals = totals_of(&ledger);
    assert_eq!(MetricsCalculator::debt_to_income_ratio(&totals), Decimal::ZERO);
    assert_eq!(MetricsCalculator::savings_rate(&totals), Decimal::ZERO);
}

#[test]
fn test_no_expenses_yields_zero_liquidity() {
    let mut ledger = LedgerStore::new();
    ledger
        .add_asset(asset("chk", AssetCategory::Checking, dec!(2500)))
        .unwrap();
    let totals = totals_of(&ledger);

    assert_eq!(MetricsCalculator::liquidity_ratio(&totals), Decimal::ZERO);
    assert_eq!(MetricsCalculator::emergency_fund_months(&totals), Decimal::ZERO);
}

#[test]
fn test_debt_to_worth_policies() {
    let empty = totals_of(&LedgerStore::new());
    assert_eq!(
        MetricsCalculator::debt_to_worth_ratio(&empty),
        DebtToWorthRatio::Finite(Decimal::ZERO)
    );

    let mut balanced = LedgerStore::new();
    balanced
        .add_asset(asset("house", AssetCategory::Property, dec!(100)))
        .unwrap();
    balanced
        .add_liability(liability("loan", LiabilityCategory::Mortgage, dec!(100), dec!(1)))
        .unwrap();
    assert_eq!(
        MetricsCalculator::debt_to_worth_ratio(&totals_of(&balanced)),
        DebtToWorthRatio::Finite(Decimal::ZERO)
    );

    let mut solvent = LedgerStore::new();
    solvent
        .add_asset(asset("house", AssetCategory::Property, dec!(300)))
        .unwrap();
    solvent
        .add_liability(liability("loan", LiabilityCategory::Mortgage, dec!(100), dec!(1)))
        .unwrap();
    let ratio = MetricsCalculator::debt_to_worth_ratio(&totals_of(&solvent));
    assert_eq!(ratio.finite(), Some(dec!(50)));
    assert!(!ratio.is_unbounded());
}

#[test]
fn test_savings_rate_can_be_negative() {
    let mut ledger = LedgerStore::new();
    ledger.add_income(income("job", dec!(2000), true)).unwrap();
    ledger.add_expense(expense("rent", dec!(3000))).unwrap();

    assert_eq!(
        MetricsCalculator::savings_rate(&totals_of(&ledger)),
        dec!(-50)
    );
}

#[test]
fn test_investment_ratio_and_allocation() {
    let mut ledger = LedgerStore::new();
    ledger
        .add_asset(asset("brk", AssetCategory::Investment, dec!(250)))
        .unwrap();
    ledger
        .add_asset(asset("401k", AssetCategory::Retirement, dec!(250)))
        .unwrap();
    ledger
        .add_asset(asset("eth", AssetCategory::Cryptocurrency, dec!(100)))
        .unwrap();
    ledger
        .add_asset(asset("house", AssetCategory::Property, dec!(400)))
        .unwrap();
    let totals = totals_of(&ledger);

    assert_eq!(MetricsCalculator::investment_ratio(&totals), dec!(60));

    let allocation = MetricsCalculator::asset_allocation(&totals);
    assert_eq!(allocation.get(AssetCategory::Investment), dec!(25));
    assert_eq!(allocation.get(AssetCategory::Property), dec!(40));
    assert_eq!(allocation.get(AssetCategory::Checking), Decimal::ZERO);
    assert_eq!(allocation.total(), dec!(100));
}

#[test]
fn test_allocation_is_zero_without_assets() {
    let allocation = MetricsCalculator::asset_allocation(&totals_of(&LedgerStore::new()));
    assert!(allocation.iter().all(|(_, pct)| pct.is_zero()));
    assert_eq!(
        MetricsCalculator::investment_ratio(&totals_of(&LedgerStore::new())),
        Decimal::ZERO
    );
}

#[test]
fn test_net_worth_growth_rate() {
    assert_eq!(MetricsCalculator::net_worth_growth_rate(&[]), Decimal::ZERO);

    let single = [snapshot(dec!(1000), dec!(0))];
    assert_eq!(MetricsCalculator::net_worth_growth_rate(&single), Decimal::ZERO);

    let history = [
        snapshot(dec!(500), dec!(0)),
        snapshot(dec!(1000), dec!(0)),
        snapshot(dec!(1100), dec!(0)),
    ];
    assert_eq!(MetricsCalculator::net_worth_growth_rate(&history), dec!(10));

    let from_zero = [snapshot(dec!(100), dec!(100)), snapshot(dec!(900), dec!(0))];
    assert_eq!(MetricsCalculator::net_worth_growth_rate(&from_zero), Decimal::ZERO);
}

#[test]
fn test_calculate_is_repeatable() {
    let ledger = mortgage_scenario();
    let totals = totals_of(&ledger);
    let history = [snapshot(dec!(10), dec!(5))];

    assert_eq!(
        MetricsCalculator::calculate(&totals, &history),
        MetricsCalculator::calculate(&totals, &history)
    );
}

#[test]
fn test_debt_to_worth_json_shape() {
    assert_eq!(
        serde_json::to_value(DebtToWorthRatio::Unbounded).unwrap(),
        serde_json::json!("unbounded")
    );
    assert_eq!(
        serde_json::to_value(DebtToWorthRatio::Finite(dec!(12.5))).unwrap(),
        serde_json::json!({ "finite": 12.5 })
    );
}

#[test]
fn test_ratios_clamp_when_quotient_leaves_decimal_range() {
    let tiny = Decimal::new(1, 28);
    let mut ledger = LedgerStore::new();
    ledger
        .add_asset(asset("sav", AssetCategory::Savings, MAX_AMOUNT))
        .unwrap();
    ledger
        .add_liability(liability("card", LiabilityCategory::CreditCard, dec!(0), MAX_AMOUNT))
        .unwrap();
    ledger.add_income(income("job", tiny, true)).unwrap();
    ledger.add_expense(expense("gum", tiny)).unwrap();

    let metrics = MetricsCalculator::calculate(&totals_of(&ledger), &[]);
    assert_eq!(metrics.liquidity_ratio, Decimal::MAX);
    assert_eq!(metrics.emergency_fund_months, Decimal::MAX);
    assert_eq!(metrics.debt_to_income_ratio, Decimal::MAX);
    assert_eq!(metrics.savings_rate, Decimal::ZERO);

    ledger.add_expense(expense("gum", MAX_AMOUNT)).unwrap();
    assert_eq!(
        MetricsCalculator::savings_rate(&totals_of(&ledger)),
        Decimal::MIN
    );
}

#[test]
fn test_percent_change_clamps_extreme_swings() {
    let tiny = Decimal::new(1, 28);
    assert_eq!(percent_change(tiny, MAX_AMOUNT), Decimal::MAX);
    assert_eq!(percent_change(tiny, -MAX_AMOUNT), Decimal::MIN);
    assert_eq!(percent_change(Decimal::MIN, Decimal::MAX), dec!(-100));
}

#[test]
fn test_finite_debt_to_worth_float_view_is_never_nan() {
    for value in [Decimal::ZERO, dec!(12.5), Decimal::MAX] {
        let float = DebtToWorthRatio::Finite(value).to_f64();
        assert!(float.is_finite());
        assert!(!float.is_nan());
    }
    assert!(DebtToWorthRatio::Unbounded.to_f64().is_infinite());
}
