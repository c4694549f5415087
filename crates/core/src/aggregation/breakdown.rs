//! Fixed-size per-category totals.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use rust_decimal::Decimal;
use serde::de::{Error as DeError, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::aggregator::saturating_sum;
use crate::ledger::{AssetCategory, Category, LiabilityCategory};

/// A complete category → amount table.
///
/// One slot per variant of `C`, zero-initialized, so every category is always
/// present. `N` must equal `C::ALL.len()`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CategoryBreakdown<C, const N: usize> {
    totals: [Decimal; N],
    _category: PhantomData<C>,
}

pub type AssetBreakdown = CategoryBreakdown<AssetCategory, { AssetCategory::COUNT }>;
pub type LiabilityBreakdown = CategoryBreakdown<LiabilityCategory, { LiabilityCategory::COUNT }>;

impl<C: Category, const N: usize> Default for CategoryBreakdown<C, N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<C: Category, const N: usize> CategoryBreakdown<C, N> {
    pub fn zeroed() -> Self {
        debug_assert_eq!(C::ALL.len(), N);
        Self {
            totals: [Decimal::ZERO; N],
            _category: PhantomData,
        }
    }

    /// Sums `(category, amount)` pairs in a single pass.
    pub fn from_amounts<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = (C, Decimal)>,
    {
        let mut breakdown = Self::zeroed();
        for (category, amount) in amounts {
            breakdown.add(category, amount);
        }
        breakdown
    }

    pub fn add(&mut self, category: C, amount: Decimal) {
        let slot = &mut self.totals[category.index()];
        *slot = slot.saturating_add(amount);
    }

    pub fn get(&self, category: C) -> Decimal {
        self.totals[category.index()]
    }

    pub fn total(&self) -> Decimal {
        saturating_sum(self.totals.iter().copied())
    }

    /// Every category with its amount, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (C, Decimal)> + '_ {
        C::ALL.iter().map(move |c| (*c, self.totals[c.index()]))
    }

    /// Applies `f` to every slot, producing a new table.
    pub fn map(&self, mut f: impl FnMut(Decimal) -> Decimal) -> Self {
        let mut totals = self.totals;
        for value in totals.iter_mut() {
            *value = f(*value);
        }
        Self {
            totals,
            _category: PhantomData,
        }
    }
}

impl<C: Category, const N: usize> fmt::Debug for CategoryBreakdown<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(c, v)| (c.as_str(), v)))
            .finish()
    }
}

impl<C: Category, const N: usize> Serialize for CategoryBreakdown<C, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(N))?;
        for (category, value) in self.iter() {
            map.serialize_entry(category.as_str(), &value)?;
        }
        map.end()
    }
}

impl<'de, C: Category, const N: usize> Deserialize<'de> for CategoryBreakdown<C, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor<C, const N: usize>(PhantomData<C>);

        impl<'de, C: Category, const N: usize> Visitor<'de> for BreakdownVisitor<C, N> {
            type Value = CategoryBreakdown<C, N>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category keys to amounts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries: BTreeMap<String, Decimal> = BTreeMap::new();
                while let Some((key, value)) = access.next_entry::<String, Decimal>()? {
                    entries.insert(key, value);
                }

                let mut breakdown = CategoryBreakdown::zeroed();
                for (key, value) in entries {
                    let category = C::from_key(&key)
                        .ok_or_else(|| A::Error::custom(format!("unknown category '{}'", key)))?;
                    breakdown.add(category, value);
                }
                Ok(breakdown)
            }
        }

        deserializer.deserialize_map(BreakdownVisitor::<C, N>(PhantomData))
    }
}
