#![deny(missing_docs)]
//! MacroLens core library.
//!
//! This crate holds the macro usage snapshot contract and the pure projections
//! that turn a snapshot into chart-ready series for the dashboard.

pub mod dashboard;
pub mod error;
pub mod histogram;
pub mod names;
pub mod normalize;
pub mod ranking;
pub mod reduce;
pub mod report;
pub mod snapshot;
pub mod source;

pub use dashboard::{
    ChartData, ChartKind, ChartPoint, Dashboard, DeriveUsageChart, Overview, TOP_CRATES,
    TOP_MACROS,
};
pub use error::{MacroLensError, Result};
pub use histogram::{derive_histogram, run_lengths, value_frequencies};
pub use names::{crate_display_name, repo_display_name};
pub use normalize::{normalize, ratio};
pub use ranking::{Entry, Measure, RankOptions, rank, rank_pairs, rank_usage};
pub use reduce::{category_total, category_total_or_zero, combined_total};
pub use report::{
    render_chart_markdown, render_chart_text, render_json, render_markdown, render_text,
};
pub use snapshot::{
    CountSeries, DeriveMacroUsage, DeriveUsage, MacroTotals, MacroUsage, SizeTable, Snapshot,
};
pub use source::{FileSnapshotSource, SnapshotCache, SnapshotSource, SnapshotState};
