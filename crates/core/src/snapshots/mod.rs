//! Snapshot module - frozen net worth captures and their append-only history.

mod snapshot_history;
mod snapshot_model;

pub use snapshot_history::SnapshotHistory;
pub use snapshot_model::NetWorthSnapshot;

#[cfg(test)]
mod snapshot_history_tests;
