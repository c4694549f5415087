//! Engine report, import/export and configuration models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BASE_CURRENCY;
use crate::ledger::{Asset, ExpenseCategory, IncomeStream, Liability};
use crate::metrics::KpiMetrics;
use crate::risk::{RiskAssessment, RiskConfig};
use crate::snapshots::NetWorthSnapshot;
use crate::trends::FinancialTrends;

/// The full financial picture at the time of the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAnalytics {
    pub generated_at: DateTime<Utc>,
    pub net_worth_history: Vec<NetWorthSnapshot>,
    pub total_monthly_income: Decimal,
    pub total_monthly_expenses: Decimal,
    pub monthly_net_income: Decimal,
    pub projected_annual_savings: Decimal,
    pub kpi_metrics: KpiMetrics,
    pub trends: FinancialTrends,
    pub risk_assessment: RiskAssessment,
}

/// Entities to load into the ledger. Absent lists are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportBundle {
    pub assets: Option<Vec<Asset>>,
    pub liabilities: Option<Vec<Liability>>,
    pub income_streams: Option<Vec<IncomeStream>>,
    pub expenses: Option<Vec<ExpenseCategory>>,
}

/// Everything the engine holds plus a freshly generated report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub assets: Vec<Asset>,
    pub liabilities: Vec<Liability>,
    pub income_streams: Vec<IncomeStream>,
    pub expenses: Vec<ExpenseCategory>,
    pub net_worth_history: Vec<NetWorthSnapshot>,
    pub analytics: FinancialAnalytics,
}

impl From<ExportData> for ImportBundle {
    fn from(export: ExportData) -> Self {
        Self {
            assets: Some(export.assets),
            liabilities: Some(export.liabilities),
            income_streams: Some(export.income_streams),
            expenses: Some(export.expenses),
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Reporting currency stamped on snapshots (default: USD)
    pub base_currency: String,
    /// Risk rule thresholds
    pub risk: RiskConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            risk: RiskConfig::default(),
        }
    }
}
