//! Financial engine: the single entry point composing ledger, history and
//! the calculators into one report.

use chrono::{DateTime, Utc};
use log::{debug, warn};

use super::engine_model::{EngineConfig, ExportData, FinancialAnalytics, ImportBundle};
use super::engine_traits::FinancialEngineTrait;
use crate::aggregation::LedgerTotals;
use crate::errors::{Error, Result};
use crate::ledger::{Asset, ExpenseCategory, IncomeStream, LedgerEntity, LedgerStore, Liability};
use crate::metrics::{KpiMetrics, MetricsCalculator};
use crate::risk::{RiskAssessment, RiskAssessor};
use crate::snapshots::{NetWorthSnapshot, SnapshotHistory};
use crate::trends::{FinancialTrends, TrendAnalyzer};

/// Validates every entity of one bundle list without applying anything.
fn validate_all<T: LedgerEntity>(entities: Option<&[T]>) -> Result<()> {
    for (index, entity) in entities.into_iter().flatten().enumerate() {
        entity.validate().map_err(|source| {
            warn!("Import rejected {} #{} '{}': {}", T::KIND, index, entity.id(), source);
            Error::Import {
                kind: T::KIND,
                index,
                source,
            }
        })?;
    }
    Ok(())
}

/// One user's financial position and its analytics.
///
/// Each session constructs its own engine; there is no shared global state.
#[derive(Debug, Clone, Default)]
pub struct FinancialEngine {
    config: EngineConfig,
    ledger: LedgerStore,
    history: SnapshotHistory,
}

impl FinancialEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    /// Current aggregates over the ledger.
    pub fn totals(&self) -> LedgerTotals {
        LedgerTotals::from_ledger(&self.ledger)
    }

    pub fn kpi_metrics(&self) -> KpiMetrics {
        MetricsCalculator::calculate(&self.totals(), self.history.as_slice())
    }

    pub fn trends(&self) -> FinancialTrends {
        let savings_rate = MetricsCalculator::savings_rate(&self.totals());
        TrendAnalyzer::analyze(self.history.as_slice(), savings_rate)
    }

    pub fn risk_assessment(&self) -> RiskAssessment {
        let totals = self.totals();
        let metrics = MetricsCalculator::calculate(&totals, self.history.as_slice());
        RiskAssessor::assess(&metrics, totals.net_worth, &self.config.risk)
    }

    /// Parses an import bundle (or a previous export) from JSON and imports it.
    pub fn import_json(&mut self, json: &str) -> Result<()> {
        let bundle: ImportBundle = serde_json::from_str(json)?;
        self.import_data(bundle)
    }

    pub fn export_json(&mut self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export_data())?)
    }
}

impl FinancialEngineTrait for FinancialEngine {
    fn add_asset(&mut self, asset: Asset) -> Result<()> {
        self.ledger.add_asset(asset)
    }

    fn add_liability(&mut self, liability: Liability) -> Result<()> {
        self.ledger.add_liability(liability)
    }

    fn add_income(&mut self, income: IncomeStream) -> Result<()> {
        self.ledger.add_income(income)
    }

    fn add_expense(&mut self, expense: ExpenseCategory) -> Result<()> {
        self.ledger.add_expense(expense)
    }

    fn remove_asset(&mut self, id: &str) -> bool {
        self.ledger.remove_asset(id)
    }

    fn remove_liability(&mut self, id: &str) -> bool {
        self.ledger.remove_liability(id)
    }

    fn remove_income(&mut self, id: &str) -> bool {
        self.ledger.remove_income(id)
    }

    fn remove_expense(&mut self, id: &str) -> bool {
        self.ledger.remove_expense(id)
    }

    fn get_all_assets(&self) -> Vec<Asset> {
        self.ledger.get_all_assets()
    }

    fn get_all_liabilities(&self) -> Vec<Liability> {
        self.ledger.get_all_liabilities()
    }

    fn get_all_income(&self) -> Vec<IncomeStream> {
        self.ledger.get_all_income()
    }

    fn get_all_expenses(&self) -> Vec<ExpenseCategory> {
        self.ledger.get_all_expenses()
    }

    fn create_snapshot(&mut self, date: Option<DateTime<Utc>>) -> NetWorthSnapshot {
        let date = date.unwrap_or_else(Utc::now);
        self.history
            .create_snapshot_at(&self.ledger, &self.config.base_currency, date)
    }

    fn get_history(&self) -> Vec<NetWorthSnapshot> {
        self.history.get_history()
    }

    fn clear_history(&mut self) {
        debug!("Clearing {} snapshots", self.history.len());
        self.history.clear();
    }

    fn generate_analytics(&mut self) -> FinancialAnalytics {
        if self.history.is_empty() {
            debug!("No snapshots recorded yet; capturing one before generating analytics");
            self.history
                .create_snapshot(&self.ledger, &self.config.base_currency);
        }

        let totals = self.totals();
        let history = self.history.as_slice();
        let kpi_metrics = MetricsCalculator::calculate(&totals, history);
        let trends = TrendAnalyzer::analyze(history, kpi_metrics.savings_rate);
        let risk_assessment = RiskAssessor::assess(&kpi_metrics, totals.net_worth, &self.config.risk);

        debug!(
            "Generated analytics over {} snapshots: net worth {} {}, risk {}",
            history.len(),
            totals.net_worth,
            self.config.base_currency,
            risk_assessment.risk_level
        );

        FinancialAnalytics {
            generated_at: Utc::now(),
            net_worth_history: self.history.get_history(),
            total_monthly_income: totals.monthly_income,
            total_monthly_expenses: totals.monthly_expenses,
            monthly_net_income: totals.monthly_net_income,
            projected_annual_savings: totals.projected_annual_savings,
            kpi_metrics,
            trends,
            risk_assessment,
        }
    }

    fn import_data(&mut self, bundle: ImportBundle) -> Result<()> {
        validate_all(bundle.assets.as_deref())?;
        validate_all(bundle.liabilities.as_deref())?;
        validate_all(bundle.income_streams.as_deref())?;
        validate_all(bundle.expenses.as_deref())?;

        let mut staged = self.ledger.clone();
        for asset in bundle.assets.into_iter().flatten() {
            staged.add_asset(asset)?;
        }
        for liability in bundle.liabilities.into_iter().flatten() {
            staged.add_liability(liability)?;
        }
        for income in bundle.income_streams.into_iter().flatten() {
            staged.add_income(income)?;
        }
        for expense in bundle.expenses.into_iter().flatten() {
            staged.add_expense(expense)?;
        }

        debug!(
            "Ledger after import: {} assets, {} liabilities, {} income streams, {} expenses",
            staged.assets().len(),
            staged.liabilities().len(),
            staged.income_streams().len(),
            staged.expenses().len()
        );
        self.ledger = staged;
        Ok(())
    }

    fn export_data(&mut self) -> ExportData {
        let analytics = self.generate_analytics();
        ExportData {
            assets: self.ledger.get_all_assets(),
            liabilities: self.ledger.get_all_liabilities(),
            income_streams: self.ledger.get_all_income(),
            expenses: self.ledger.get_all_expenses(),
            net_worth_history: self.history.get_history(),
            analytics,
        }
    }

    fn reset(&mut self) {
        debug!("Resetting ledger and snapshot history");
        self.ledger.clear();
        self.history.clear();
    }
}
