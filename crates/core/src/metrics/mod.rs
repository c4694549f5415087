//! Metrics module - KPI models and the calculator that derives them.

mod metrics_calculator;
mod metrics_model;

pub use metrics_calculator::MetricsCalculator;
pub(crate) use metrics_calculator::percent_change;
pub use metrics_model::{DebtToWorthRatio, KpiMetrics};

#[cfg(test)]
mod metrics_calculator_tests;
