use rust_decimal::Decimal;

/// Default reporting currency stamped on snapshots.
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Months per year, used to project annual savings.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Multiplier turning a fraction into a percentage.
pub const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Largest amount a single ledger entry may carry (one quadrillion).
///
/// Keeps every aggregate far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);
