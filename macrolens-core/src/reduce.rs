//! Category totals.

use crate::error::{MacroLensError, Result};
use crate::snapshot::MacroUsage;

/// Sum every count in a category mapping.
///
/// An empty mapping has no total and fails with [`MacroLensError::EmptyMapping`];
/// use [`category_total_or_zero`] where an empty category should count as 0.
pub fn category_total(usage: &MacroUsage) -> Result<u64> {
    if usage.is_empty() {
        return Err(MacroLensError::EmptyMapping);
    }
    Ok(usage
        .values()
        .fold(0u64, |total, count| total.saturating_add(*count)))
}

/// Sum a category mapping, treating an empty mapping as 0.
pub fn category_total_or_zero(usage: &MacroUsage) -> u64 {
    category_total(usage).unwrap_or(0)
}

/// Sum several categories into one total, empty categories contributing 0.
pub fn combined_total(categories: &[&MacroUsage]) -> u64 {
    categories
        .iter()
        .map(|usage| category_total_or_zero(usage))
        .fold(0u64, u64::saturating_add)
}
