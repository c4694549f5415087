//! Net worth snapshot model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregation::{AssetBreakdown, LedgerTotals, LiabilityBreakdown};

/// A frozen capture of the ledger aggregates at a point in time.
///
/// Only [`SnapshotHistory`](super::SnapshotHistory) creates these; fields are
/// read through accessors so a snapshot cannot be altered once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSnapshot {
    id: String,
    date: DateTime<Utc>,
    total_assets: Decimal,
    total_liabilities: Decimal,
    /// total_assets - total_liabilities
    net_worth: Decimal,
    currency: String,
    asset_breakdown: AssetBreakdown,
    liability_breakdown: LiabilityBreakdown,
}

impl NetWorthSnapshot {
    pub(crate) fn capture(totals: &LedgerTotals, date: DateTime<Utc>, currency: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            total_assets: totals.total_assets,
            total_liabilities: totals.total_liabilities,
            net_worth: totals.net_worth,
            currency: currency.to_string(),
            asset_breakdown: totals.asset_breakdown,
            liability_breakdown: totals.liability_breakdown,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn total_assets(&self) -> Decimal {
        self.total_assets
    }

    pub fn total_liabilities(&self) -> Decimal {
        self.total_liabilities
    }

    pub fn net_worth(&self) -> Decimal {
        self.net_worth
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn asset_breakdown(&self) -> &AssetBreakdown {
        &self.asset_breakdown
    }

    pub fn liability_breakdown(&self) -> &LiabilityBreakdown {
        &self.liability_breakdown
    }
}
