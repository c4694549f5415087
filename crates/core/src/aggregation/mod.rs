//! Aggregation module - totals and complete category breakdowns.

mod aggregator;
mod breakdown;

pub use aggregator::*;
pub use breakdown::{AssetBreakdown, CategoryBreakdown, LiabilityBreakdown};
