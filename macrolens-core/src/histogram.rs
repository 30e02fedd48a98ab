//! Run-length histograms over sorted samples.

use crate::ranking::Entry;

/// Lengths of the runs of equal values in a non-decreasing sequence.
///
/// `[1, 1, 1, 2, 2, 3]` becomes `[3, 2, 1]`. The scan looks one index past the
/// end so the final run is always flushed; an empty input yields no runs.
pub fn run_lengths(sorted: &[u64]) -> Vec<u64> {
    let mut counts = Vec::new();
    let mut current = 1u64;

    for index in 1..=sorted.len() {
        if sorted.get(index) == Some(&sorted[index - 1]) {
            current += 1;
        } else {
            counts.push(current);
            current = 1;
        }
    }

    counts
}

/// Run lengths labelled by position, as the derive usage chart shows them.
///
/// Run `i` is labelled `"{i + 1} derives"`. The label matches the derive count
/// only when every count from 1 up to the maximum occurs in the data.
pub fn derive_histogram(sorted: &[u64]) -> Vec<Entry<u64>> {
    run_lengths(sorted)
        .into_iter()
        .enumerate()
        .map(|(index, count)| Entry::new(format!("{} derives", index + 1), count))
        .collect()
}

/// `(value, occurrences)` for each distinct value of a non-decreasing sequence.
pub fn value_frequencies(sorted: &[u64]) -> Vec<(u64, u64)> {
    sorted
        .chunk_by(|a, b| a == b)
        .map(|run| (run[0], run.len() as u64))
        .collect()
}
