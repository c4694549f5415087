//! WealthPulse Core - personal balance sheet analytics.
//!
//! This crate holds a user's assets, liabilities, income streams and expenses
//! in memory and derives net worth, KPI ratios, trends and a rule-based risk
//! assessment from them. It performs no I/O; persistence and transport layers
//! exchange data with it through the serializable import/export models.

pub mod aggregation;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod ledger;
pub mod metrics;
pub mod risk;
pub mod snapshots;
pub mod trends;

#[cfg(test)]
mod testing;

// Re-export the engine entry points and domain types
pub use engine::*;
pub use ledger::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
