//! Engine module - the analytics facade over ledger, history and calculators.
//!
//! ```text
//! FinancialEngine ─┬─ LedgerStore ──► LedgerTotals ─┬─► MetricsCalculator ─► RiskAssessor
//!                  └─ SnapshotHistory ──────────────┴─► TrendAnalyzer
//! ```

mod engine_model;
mod engine_service;
mod engine_traits;

pub use engine_model::{EngineConfig, ExportData, FinancialAnalytics, ImportBundle};
pub use engine_service::FinancialEngine;
pub use engine_traits::FinancialEngineTrait;
