//! Ranked projections for bar and treemap charts.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::snapshot::MacroUsage;

/// A keyed value in a projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<V> {
    /// Repository key, crate path, macro name or chart label.
    pub key: String,
    /// Count or ratio for the key.
    pub value: V,
}

impl<V> Entry<V> {
    /// Create an entry.
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Values that can be ranked.
pub trait Measure: Copy {
    /// Whether the value carries no information for a ranking.
    fn is_zero(&self) -> bool;
    /// Total ordering used for ranking.
    fn rank_cmp(&self, other: &Self) -> Ordering;
}

impl Measure for u64 {
    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Measure for f64 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Options applied when ranking a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOptions {
    /// Keep at most this many entries, counted after sorting.
    pub limit: Option<usize>,
    /// Drop zero-valued entries before sorting.
    pub exclude_zero: bool,
}

impl RankOptions {
    /// Rank everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Keep the top `limit` entries.
    pub fn top(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            exclude_zero: false,
        }
    }

    /// Also drop zero-valued entries.
    pub fn non_zero(mut self) -> Self {
        self.exclude_zero = true;
        self
    }
}

/// Sort entries by value, descending.
///
/// Ties keep their input order. Zero filtering happens before the sort and
/// truncation after it.
pub fn rank<V, I>(entries: I, options: RankOptions) -> Vec<Entry<V>>
where
    V: Measure,
    I: IntoIterator<Item = Entry<V>>,
{
    let mut ranked: Vec<Entry<V>> = entries
        .into_iter()
        .filter(|entry| !(options.exclude_zero && entry.value.is_zero()))
        .collect();
    ranked.sort_by(|a, b| b.value.rank_cmp(&a.value));
    if let Some(limit) = options.limit {
        ranked.truncate(limit);
    }
    ranked
}

/// Rank `(key, count)` pairs as they appear in the snapshot.
pub fn rank_pairs(pairs: &[(String, u64)], options: RankOptions) -> Vec<Entry<u64>> {
    rank(
        pairs.iter().map(|(key, count)| Entry::new(key.as_str(), *count)),
        options,
    )
}

/// Rank the macros of a usage mapping. Ties keep name order.
pub fn rank_usage(usage: &MacroUsage, options: RankOptions) -> Vec<Entry<u64>> {
    rank(
        usage
            .iter()
            .map(|(name, count)| Entry::new(name.as_str(), *count)),
        options,
    )
}
