use crate::errors::ValidationError;

/// An entity kind held by the ledger, keyed by its identifier.
pub trait LedgerEntity: Clone {
    /// Human-readable kind name used in logs and import errors.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Checks required fields and non-negativity constraints.
    fn validate(&self) -> std::result::Result<(), ValidationError>;
}

/// A fixed enumeration of categories that can index a breakdown table.
///
/// `ALL` lists every variant in declaration order and `index()` returns the
/// variant's position in it.
pub trait Category: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn index(self) -> usize;

    /// Stable serialization key (e.g. `"car_loan"`).
    fn as_str(self) -> &'static str;

    /// Display name (e.g. `"Car Loan"`).
    fn label(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == key)
    }
}
