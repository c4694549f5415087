use chrono::{DateTime, Utc};

use super::engine_model::{ExportData, FinancialAnalytics, ImportBundle};
use crate::errors::Result;
use crate::ledger::{Asset, ExpenseCategory, IncomeStream, Liability};
use crate::snapshots::NetWorthSnapshot;

/// Trait defining the contract for financial engine operations.
///
/// Implementations own their state exclusively and do no internal locking;
/// hosts sharing one instance across callers must serialize access.
pub trait FinancialEngineTrait {
    fn add_asset(&mut self, asset: Asset) -> Result<()>;
    fn add_liability(&mut self, liability: Liability) -> Result<()>;
    fn add_income(&mut self, income: IncomeStream) -> Result<()>;
    fn add_expense(&mut self, expense: ExpenseCategory) -> Result<()>;

    fn remove_asset(&mut self, id: &str) -> bool;
    fn remove_liability(&mut self, id: &str) -> bool;
    fn remove_income(&mut self, id: &str) -> bool;
    fn remove_expense(&mut self, id: &str) -> bool;

    fn get_all_assets(&self) -> Vec<Asset>;
    fn get_all_liabilities(&self) -> Vec<Liability>;
    fn get_all_income(&self) -> Vec<IncomeStream>;
    fn get_all_expenses(&self) -> Vec<ExpenseCategory>;

    /// Captures the current ledger at `date` (now when `None`).
    fn create_snapshot(&mut self, date: Option<DateTime<Utc>>) -> NetWorthSnapshot;
    fn get_history(&self) -> Vec<NetWorthSnapshot>;
    fn clear_history(&mut self);

    /// Builds the full report, first recording a snapshot if history is empty.
    fn generate_analytics(&mut self) -> FinancialAnalytics;

    /// Loads a bundle of entities. Either every entity is applied or none is.
    fn import_data(&mut self, bundle: ImportBundle) -> Result<()>;
    fn export_data(&mut self) -> ExportData;

    /// Clears every entity collection and the snapshot history.
    fn reset(&mut self);
}
