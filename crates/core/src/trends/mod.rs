//! Trends module - period-over-period comparison of the latest snapshots.

mod trend_analyzer;
mod trends_model;

pub use trend_analyzer::TrendAnalyzer;
pub use trends_model::{FinancialTrends, TrendDirection};
