//! Ledger module - entity models, validation, and the in-memory store.

mod ledger_model;
mod ledger_store;
mod ledger_traits;

pub use ledger_model::*;
pub use ledger_store::{EntityCollection, LedgerStore};
pub use ledger_traits::{Category, LedgerEntity};
