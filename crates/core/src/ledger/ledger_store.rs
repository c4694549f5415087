//! In-memory ledger holding the four entity collections.

use log::{debug, warn};

use super::ledger_model::{Asset, ExpenseCategory, IncomeStream, Liability};
use super::ledger_traits::LedgerEntity;
use crate::errors::Result;

/// An insertion-ordered collection of entities with upsert-by-id semantics.
///
/// Replacing an existing id keeps the entity at its original position.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCollection<T> {
    entries: Vec<T>,
}

impl<T> Default for EntityCollection<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: LedgerEntity> EntityCollection<T> {
    /// Validates and inserts `entity`, replacing any entry with the same id.
    pub fn upsert(&mut self, entity: T) -> Result<()> {
        if let Err(err) = entity.validate() {
            warn!("Rejected {} '{}': {}", T::KIND, entity.id(), err);
            return Err(err.into());
        }

        match self.entries.iter_mut().find(|e| e.id() == entity.id()) {
            Some(slot) => {
                debug!("Replacing {} '{}'", T::KIND, entity.id());
                *slot = entity;
            }
            None => self.entries.push(entity),
        }
        Ok(())
    }

    /// Removes the entity with `id`. Returns whether one existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        self.entries.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Detached copy in insertion order.
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Owns the user's assets, liabilities, income streams and expenses.
///
/// Read access hands out slices or detached copies; the only way to change an
/// entity is to add a replacement with the same id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerStore {
    assets: EntityCollection<Asset>,
    liabilities: EntityCollection<Liability>,
    income_streams: EntityCollection<IncomeStream>,
    expenses: EntityCollection<ExpenseCategory>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- assets ---

    pub fn add_asset(&mut self, asset: Asset) -> Result<()> {
        self.assets.upsert(asset)
    }

    pub fn remove_asset(&mut self, id: &str) -> bool {
        self.assets.remove(id)
    }

    pub fn get_asset(&self, id: &str) -> Option<&Asset> {
        self.assets.get(id)
    }

    pub fn get_all_assets(&self) -> Vec<Asset> {
        self.assets.to_vec()
    }

    pub fn assets(&self) -> &[Asset] {
        self.assets.as_slice()
    }

    // --- liabilities ---

    pub fn add_liability(&mut self, liability: Liability) -> Result<()> {
        self.liabilities.upsert(liability)
    }

    pub fn remove_liability(&mut self, id: &str) -> bool {
        self.liabilities.remove(id)
    }

    pub fn get_liability(&self, id: &str) -> Option<&Liability> {
        self.liabilities.get(id)
    }

    pub fn get_all_liabilities(&self) -> Vec<Liability> {
        self.liabilities.to_vec()
    }

    pub fn liabilities(&self) -> &[Liability] {
        self.liabilities.as_slice()
    }

    // --- income ---

    pub fn add_income(&mut self, income: IncomeStream) -> Result<()> {
        self.income_streams.upsert(income)
    }

    pub fn remove_income(&mut self, id: &str) -> bool {
        self.income_streams.remove(id)
    }

    pub fn get_income(&self, id: &str) -> Option<&IncomeStream> {
        self.income_streams.get(id)
    }

    pub fn get_all_income(&self) -> Vec<IncomeStream> {
        self.income_streams.to_vec()
    }

    pub fn income_streams(&self) -> &[IncomeStream] {
        self.income_streams.as_slice()
    }

    // --- expenses ---

    pub fn add_expense(&mut self, expense: ExpenseCategory) -> Result<()> {
        self.expenses.upsert(expense)
    }

    pub fn remove_expense(&mut self, id: &str) -> bool {
        self.expenses.remove(id)
    }

    pub fn get_expense(&self, id: &str) -> Option<&ExpenseCategory> {
        self.expenses.get(id)
    }

    pub fn get_all_expenses(&self) -> Vec<ExpenseCategory> {
        self.expenses.to_vec()
    }

    pub fn expenses(&self) -> &[ExpenseCategory] {
        self.expenses.as_slice()
    }

    /// True when all four collections are empty.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
            && self.liabilities.is_empty()
            && self.income_streams.is_empty()
            && self.expenses.is_empty()
    }

    pub fn clear(&mut self) {
        self.assets.clear();
        self.liabilities.clear();
        self.income_streams.clear();
        self.expenses.clear();
    }
}
