//! Unit tests for snapshot history.

use super::*;
use crate::ledger::{AssetCategory, LedgerStore, LiabilityCategory};
use crate::testing::{asset, liability};
use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn ledger_with(value: Decimal) -> LedgerStore {
    let mut ledger = LedgerStore::new();
    ledger
        .add_asset(asset("sav", AssetCategory::Savings, value))
        .unwrap();
    ledger
        .add_liability(liability("cc", LiabilityCategory::CreditCard, dec!(250), dec!(25)))
        .unwrap();
    ledger
}

#[test]
fn test_snapshot_captures_totals_and_breakdowns() {
    let mut history = SnapshotHistory::new();
    let date = Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 0).unwrap();

    let snap = history.create_snapshot_at(&ledger_with(dec!(1000)), "EUR", date);

    assert_eq!(snap.date(), date);
    assert_eq!(snap.currency(), "EUR");
    assert_eq!(snap.total_assets(), dec!(1000));
    assert_eq!(snap.total_liabilities(), dec!(250));
    assert_eq!(snap.net_worth(), dec!(750));
    assert_eq!(snap.asset_breakdown().get(AssetCategory::Savings), dec!(1000));
    assert_eq!(snap.asset_breakdown().get(AssetCategory::Checking), Decimal::ZERO);
    assert_eq!(
        snap.liability_breakdown().get(LiabilityCategory::CreditCard),
        dec!(250)
    );
    assert!(!snap.id().is_empty());
    assert_eq!(history.latest(), Some(&snap));
}

#[test]
fn test_snapshot_is_frozen_after_ledger_changes() {
    let mut history = SnapshotHistory::new();
    let mut ledger = ledger_with(dec!(1000));
    history.create_snapshot(&ledger, "USD");

    ledger
        .add_asset(asset("sav", AssetCategory::Savings, dec!(5)))
        .unwrap();

    assert_eq!(history.get_history()[0].total_assets(), dec!(1000));
}

#[test]
fn test_history_keeps_append_order() {
    let mut history = SnapshotHistory::new();
    let later = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let earlier = later - Duration::days(30);

    history.create_snapshot_at(&ledger_with(dec!(2000)), "USD", later);
    history.create_snapshot_at(&ledger_with(dec!(1000)), "USD", earlier);

    let dates: Vec<_> = history.get_history().iter().map(|s| s.date()).collect();
    assert_eq!(dates, vec![later, earlier]);
}

#[test]
fn test_ids_are_unique() {
    let mut history = SnapshotHistory::new();
    let ledger = ledger_with(dec!(1));
    let a = history.create_snapshot(&ledger, "USD");
    let b = history.create_snapshot(&ledger, "USD");
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_get_history_is_a_copy_and_clear_empties() {
    let mut history = SnapshotHistory::new();
    history.create_snapshot(&ledger_with(dec!(1)), "USD");

    let mut copy = history.get_history();
    copy.clear();
    assert_eq!(history.len(), 1);

    history.clear();
    assert!(history.is_empty());
    assert!(history.latest().is_none());
}

#[test]
fn test_snapshot_json_round_trip() {
    let mut history = SnapshotHistory::new();
    let snap = history.create_snapshot(&ledger_with(dec!(1234.5)), "USD");

    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.contains("\"netWorth\""));
    assert!(json.contains("\"assetBreakdown\""));

    let parsed: NetWorthSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.id(), snap.id());
    assert_eq!(parsed.net_worth(), snap.net_worth());
    assert_eq!(parsed.date(), snap.date());
}
