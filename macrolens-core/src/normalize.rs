//! Density ratios of counts over code size.

use crate::ranking::Entry;
use crate::snapshot::SizeTable;

/// Divide each count by its key's denominator.
///
/// A zero or missing denominator yields a ratio of 0. Output keeps input order.
pub fn normalize(pairs: &[(String, u64)], denominators: &SizeTable) -> Vec<Entry<f64>> {
    pairs
        .iter()
        .map(|(key, numerator)| {
            let denominator = denominators.get(key).copied();
            if denominator.is_none() {
                log::trace!("no denominator for {key}; ratio is 0");
            }
            Entry::new(key.as_str(), ratio(*numerator, denominator.unwrap_or(0)))
        })
        .collect()
}

/// `numerator / denominator`, or 0 when the denominator is 0.
pub fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
