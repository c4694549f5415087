//! Entity builders shared by the unit tests.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::ledger::{
    Asset, AssetCategory, ExpenseCategory, IncomeStream, LedgerStore, Liability,
    LiabilityCategory,
};
use crate::snapshots::{NetWorthSnapshot, SnapshotHistory};

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

pub fn asset(id: &str, category: AssetCategory, value: Decimal) -> Asset {
    Asset {
        id: id.to_string(),
        name: format!("Asset {}", id),
        category,
        value,
        currency: "USD".to_string(),
        last_updated: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        metadata: None,
    }
}

pub fn liability(
    id: &str,
    category: LiabilityCategory,
    balance: Decimal,
    monthly_payment: Decimal,
) -> Liability {
    Liability {
        id: id.to_string(),
        name: format!("Liability {}", id),
        category,
        balance,
        interest_rate: Decimal::new(45, 1),
        monthly_payment,
        currency: "USD".to_string(),
        start_date: start_date(),
        end_date: None,
    }
}

pub fn income(id: &str, monthly_amount: Decimal, is_active: bool) -> IncomeStream {
    IncomeStream {
        id: id.to_string(),
        name: format!("Income {}", id),
        monthly_amount,
        currency: "USD".to_string(),
        category: "salary".to_string(),
        is_active,
        start_date: start_date(),
        end_date: None,
    }
}

pub fn expense(id: &str, monthly_amount: Decimal) -> ExpenseCategory {
    ExpenseCategory {
        id: id.to_string(),
        name: format!("Expense {}", id),
        monthly_amount,
        currency: "USD".to_string(),
        category: "housing".to_string(),
        is_recurring: true,
        start_date: start_date(),
        end_date: None,
    }
}

/// Snapshot of a ledger holding one asset and one liability with the given amounts.
pub fn snapshot(total_assets: Decimal, total_liabilities: Decimal) -> NetWorthSnapshot {
    let mut ledger = LedgerStore::new();
    ledger
        .add_asset(asset("a", AssetCategory::Checking, total_assets))
        .unwrap();
    ledger
        .add_liability(liability(
            "l",
            LiabilityCategory::Mortgage,
            total_liabilities,
            Decimal::ZERO,
        ))
        .unwrap();
    SnapshotHistory::new().create_snapshot(&ledger, "USD")
}
