//! Risk module - rule-based assessment of the current financial position.
//!
//! Rules run in a fixed order over the KPI set and net worth. Each rule adds at
//! most one [`RiskFactor`] with its recommendation, and the overall
//! [`RiskLevel`] depends only on how many factors fired:
//!
//! - **0** - Low
//! - **1-2** - Moderate
//! - **3-4** - High
//! - **5+** - Critical

mod risk_assessor;
mod risk_model;

pub use risk_assessor::RiskAssessor;
pub use risk_model::{RiskAssessment, RiskConfig, RiskFactor, RiskLevel};
