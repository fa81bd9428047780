use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::keys::{CriterionKey, EvidenceKey};
use crate::numeric::finite_or_zero;

/// The fixed-shape set of evidence accumulators.
///
/// Every [`EvidenceKey`] is always present, starting at zero. Values are
/// unbounded reals built up by summation; a set is rebuilt from scratch on
/// each aggregation pass and never patched incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvidenceSet(BTreeMap<EvidenceKey, f64>);

impl Default for EvidenceSet {
    fn default() -> Self {
        Self(EvidenceKey::ALL.into_iter().map(|k| (k, 0.0)).collect())
    }
}

impl EvidenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `key`; a key missing from a deserialized set reads as zero.
    pub fn get(&self, key: EvidenceKey) -> f64 {
        self.0.get(&key).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, key: EvidenceKey, value: f64) {
        self.0.insert(key, finite_or_zero(value));
    }

    /// Add `delta` to `key`. Non-finite deltas contribute nothing.
    pub fn add(&mut self, key: EvidenceKey, delta: f64) {
        *self.0.entry(key).or_insert(0.0) += finite_or_zero(delta);
    }

    pub fn criterion(&self, key: CriterionKey) -> f64 {
        self.get(key.into())
    }

    /// Sum of the given criterion accumulators.
    pub fn criterion_sum(&self, keys: &[CriterionKey]) -> f64 {
        keys.iter().map(|k| self.criterion(*k)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EvidenceKey, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}
