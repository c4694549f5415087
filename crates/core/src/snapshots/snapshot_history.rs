//! Append-only snapshot history.

use chrono::{DateTime, Utc};
use log::debug;

use super::snapshot_model::NetWorthSnapshot;
use crate::aggregation::LedgerTotals;
use crate::ledger::LedgerStore;

/// Ordered sequence of snapshots in append order.
///
/// Entries are never removed individually; growth is controlled by the caller
/// through [`clear`](Self::clear).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotHistory {
    snapshots: Vec<NetWorthSnapshot>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the ledger as of now.
    pub fn create_snapshot(&mut self, ledger: &LedgerStore, currency: &str) -> NetWorthSnapshot {
        self.create_snapshot_at(ledger, currency, Utc::now())
    }

    /// Captures the ledger with an explicit timestamp and appends it.
    ///
    /// The date is recorded as given; history is not re-sorted.
    pub fn create_snapshot_at(
        &mut self,
        ledger: &LedgerStore,
        currency: &str,
        date: DateTime<Utc>,
    ) -> NetWorthSnapshot {
        let totals = LedgerTotals::from_ledger(ledger);
        let snapshot = NetWorthSnapshot::capture(&totals, date, currency);
        debug!(
            "Recorded snapshot {} at {}: net worth {} {}",
            snapshot.id(),
            date,
            snapshot.net_worth(),
            currency
        );
        self.snapshots.push(snapshot.clone());
        snapshot
    }

    /// Detached copy of the full history.
    pub fn get_history(&self) -> Vec<NetWorthSnapshot> {
        self.snapshots.clone()
    }

    pub fn as_slice(&self) -> &[NetWorthSnapshot] {
        &self.snapshots
    }

    pub fn latest(&self) -> Option<&NetWorthSnapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
