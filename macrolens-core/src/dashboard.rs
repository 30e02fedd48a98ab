//! Chart projections shown on the macro usage dashboard.
//!
//! Every projection is a pure function of an explicit [`Snapshot`]. The
//! [`Dashboard`] collects them all and is empty when the snapshot is absent.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::MacroLensError;
use crate::histogram::{derive_histogram, value_frequencies};
use crate::names::{crate_display_name, repo_display_name};
use crate::normalize::normalize;
use crate::ranking::{Entry, RankOptions, rank, rank_pairs, rank_usage};
use crate::reduce::{category_total_or_zero, combined_total};
use crate::snapshot::{CountSeries, MacroUsage, SizeTable, Snapshot};
use crate::source::SnapshotState;

/// Rows kept in the most-used custom attribute, function-like and derive charts.
pub const TOP_MACROS: usize = 20;
/// Rows kept in the builtin attribute and per-crate charts.
pub const TOP_CRATES: usize = 100;

/// A labelled data point ready for a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint<V> {
    /// Key in the snapshot.
    pub key: String,
    /// Short display label. May be empty for keys without a display form.
    pub label: String,
    /// Count or ratio.
    pub value: V,
}

impl<V> ChartPoint<V> {
    fn labelled(entry: Entry<V>, label: impl Fn(&str) -> &str) -> Self {
        let display = label(&entry.key).to_string();
        Self {
            key: entry.key,
            label: display,
            value: entry.value,
        }
    }

    /// Label to print, falling back to the key when the label is empty.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.key
        } else {
            &self.label
        }
    }
}

/// Headline numbers of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    /// Crates analyzed.
    pub crates: usize,
    /// Macro invocations of every kind.
    pub invocations: u64,
    /// Macro definitions of every kind.
    pub definitions: u64,
    /// Date the snapshot was generated on.
    pub date: Option<NaiveDate>,
}

/// Derives per `#[derive(...)]` attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeriveUsageChart {
    /// Run-length histogram of the sorted samples, labelled by position.
    pub histogram: Vec<ChartPoint<u64>>,
    /// Attributes per distinct derive count, labelled by the count itself.
    pub frequencies: Vec<ChartPoint<u64>>,
    /// Mean derives per attribute.
    pub avg: f64,
    /// Median derives per attribute.
    pub median: f64,
    /// Most common derives-per-attribute value.
    pub mode: f64,
    /// Largest derives-per-attribute value.
    pub max: f64,
    /// Derive attributes observed.
    pub count: u64,
}

/// All dashboard projections for one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Whether a snapshot was available.
    pub loaded: bool,
    /// Headline numbers.
    pub overview: Overview,
    /// Derives-per-attribute distribution.
    pub derive_usage: DeriveUsageChart,
    /// Invocations per macro kind.
    pub invocations_by_type: Vec<ChartPoint<u64>>,
    /// Definitions per macro kind.
    pub definitions_by_type: Vec<ChartPoint<u64>>,
    /// Most invoked builtin attributes.
    pub most_used_builtin_attributes: Vec<ChartPoint<u64>>,
    /// Most invoked custom attribute macros.
    pub most_used_custom_attributes: Vec<ChartPoint<u64>>,
    /// Most invoked function-like and declarative macros.
    pub most_used_function_like: Vec<ChartPoint<u64>>,
    /// Most listed derives.
    pub most_used_derives: Vec<ChartPoint<u64>>,
    /// Invocations per repository.
    pub invocations_per_repo: Vec<ChartPoint<u64>>,
    /// Definitions per repository, zero rows dropped.
    pub definitions_per_repo: Vec<ChartPoint<u64>>,
    /// Invocations per line of code, per repository.
    pub invocations_per_repo_normalized: Vec<ChartPoint<f64>>,
    /// Definitions per line of code, per repository, zero rows dropped.
    pub definitions_per_repo_normalized: Vec<ChartPoint<f64>>,
    /// Invocations per crate.
    pub invocations_per_crate: Vec<ChartPoint<u64>>,
    /// Definitions per crate.
    pub definitions_per_crate: Vec<ChartPoint<u64>>,
    /// Invocations per line of code, per crate.
    pub invocations_per_crate_normalized: Vec<ChartPoint<f64>>,
    /// Definitions per line of code, per crate.
    pub definitions_per_crate_normalized: Vec<ChartPoint<f64>>,
    /// Lines of code per repository.
    pub lines_per_repo: Vec<ChartPoint<u64>>,
}

impl Dashboard {
    /// Project every chart from the session state.
    ///
    /// An absent snapshot produces the empty dashboard.
    pub fn build(state: &SnapshotState) -> Self {
        match state.require() {
            Ok(snapshot) => Self::from_snapshot(snapshot),
            Err(err) => {
                log::debug!("projecting empty dashboard: {err}");
                Self::default()
            }
        }
    }

    /// Project every chart from a loaded snapshot.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            loaded: true,
            overview: overview(snapshot),
            derive_usage: derive_usage(snapshot),
            invocations_by_type: invocations_by_type(snapshot),
            definitions_by_type: definitions_by_type(snapshot),
            most_used_builtin_attributes: most_used(
                &snapshot.total_macro_usage.builtin_attribute_macro_invocations,
                TOP_CRATES,
            ),
            most_used_custom_attributes: most_used(
                &snapshot.total_macro_usage.attribute_macro_invocations,
                TOP_MACROS,
            ),
            most_used_function_like: most_used(
                &snapshot.total_macro_usage.macro_invocations,
                TOP_MACROS,
            ),
            most_used_derives: most_used(
                &snapshot.total_macro_usage.derive_macro_usage.derives,
                TOP_MACROS,
            ),
            invocations_per_repo: per_repo(&snapshot.macro_invocations_per_repo, RankOptions::all()),
            definitions_per_repo: per_repo(
                &snapshot.macro_definitions_per_repo,
                RankOptions::all().non_zero(),
            ),
            invocations_per_repo_normalized: per_repo_normalized(
                &snapshot.macro_invocations_per_repo,
                &snapshot.lines_per_repo,
                RankOptions::all(),
            ),
            definitions_per_repo_normalized: per_repo_normalized(
                &snapshot.macro_definitions_per_repo,
                &snapshot.lines_per_repo,
                RankOptions::all().non_zero(),
            ),
            invocations_per_crate: per_crate(
                &snapshot.macro_invocations_per_crate,
                RankOptions::top(TOP_CRATES),
            ),
            definitions_per_crate: per_crate(
                &snapshot.macro_definitions_per_crate,
                RankOptions::top(TOP_CRATES),
            ),
            invocations_per_crate_normalized: per_crate_normalized(
                &snapshot.macro_invocations_per_crate,
                &snapshot.lines_per_crate,
                RankOptions::top(TOP_CRATES),
            ),
            definitions_per_crate_normalized: per_crate_normalized(
                &snapshot.macro_definitions_per_crate,
                &snapshot.lines_per_crate,
                RankOptions::top(TOP_CRATES),
            ),
            lines_per_repo: lines_per_repo(snapshot),
        }
    }

    /// Data of a single chart.
    pub fn chart(&self, kind: ChartKind) -> ChartData<'_> {
        match kind {
            ChartKind::Overview => ChartData::Overview(&self.overview),
            ChartKind::DeriveUsage => ChartData::DeriveUsage(&self.derive_usage),
            ChartKind::InvocationsByType => ChartData::Counts(&self.invocations_by_type),
            ChartKind::DefinitionsByType => ChartData::Counts(&self.definitions_by_type),
            ChartKind::BuiltinAttributes => ChartData::Counts(&self.most_used_builtin_attributes),
            ChartKind::CustomAttributes => ChartData::Counts(&self.most_used_custom_attributes),
            ChartKind::FunctionLikeMacros => ChartData::Counts(&self.most_used_function_like),
            ChartKind::DeriveMacros => ChartData::Counts(&self.most_used_derives),
            ChartKind::InvocationsPerRepo => ChartData::Counts(&self.invocations_per_repo),
            ChartKind::DefinitionsPerRepo => ChartData::Counts(&self.definitions_per_repo),
            ChartKind::InvocationsPerRepoNormalized => {
                ChartData::Ratios(&self.invocations_per_repo_normalized)
            }
            ChartKind::DefinitionsPerRepoNormalized => {
                ChartData::Ratios(&self.definitions_per_repo_normalized)
            }
            ChartKind::InvocationsPerCrate => ChartData::Counts(&self.invocations_per_crate),
            ChartKind::DefinitionsPerCrate => ChartData::Counts(&self.definitions_per_crate),
            ChartKind::InvocationsPerCrateNormalized => {
                ChartData::Ratios(&self.invocations_per_crate_normalized)
            }
            ChartKind::DefinitionsPerCrateNormalized => {
                ChartData::Ratios(&self.definitions_per_crate_normalized)
            }
            ChartKind::LinesPerRepo => ChartData::Counts(&self.lines_per_repo),
        }
    }
}

/// Borrowed data of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartData<'a> {
    /// Headline numbers.
    Overview(&'a Overview),
    /// Derive usage histogram and statistics.
    DeriveUsage(&'a DeriveUsageChart),
    /// Integer series.
    Counts(&'a [ChartPoint<u64>]),
    /// Ratio series.
    Ratios(&'a [ChartPoint<f64>]),
}

/// The charts of the dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Headline numbers.
    Overview,
    /// Derives per derive attribute.
    DeriveUsage,
    /// Invocation count by macro kind.
    InvocationsByType,
    /// Definition count by macro kind.
    DefinitionsByType,
    /// Most used builtin attributes.
    BuiltinAttributes,
    /// Most used custom attribute macros.
    CustomAttributes,
    /// Most used function-like and declarative macros.
    FunctionLikeMacros,
    /// Most used derives.
    DeriveMacros,
    /// Invocations per repository.
    InvocationsPerRepo,
    /// Definitions per repository.
    DefinitionsPerRepo,
    /// Invocations per repository, lines normalized.
    InvocationsPerRepoNormalized,
    /// Definitions per repository, lines normalized.
    DefinitionsPerRepoNormalized,
    /// Invocations per crate.
    InvocationsPerCrate,
    /// Definitions per crate.
    DefinitionsPerCrate,
    /// Invocations per crate, lines normalized.
    InvocationsPerCrateNormalized,
    /// Definitions per crate, lines normalized.
    DefinitionsPerCrateNormalized,
    /// Lines of code per repository.
    LinesPerRepo,
}

impl ChartKind {
    /// Every chart, in display order.
    pub const ALL: [ChartKind; 17] = [
        ChartKind::Overview,
        ChartKind::DeriveUsage,
        ChartKind::InvocationsByType,
        ChartKind::DefinitionsByType,
        ChartKind::BuiltinAttributes,
        ChartKind::CustomAttributes,
        ChartKind::FunctionLikeMacros,
        ChartKind::DeriveMacros,
        ChartKind::InvocationsPerRepo,
        ChartKind::DefinitionsPerRepo,
        ChartKind::InvocationsPerRepoNormalized,
        ChartKind::DefinitionsPerRepoNormalized,
        ChartKind::InvocationsPerCrate,
        ChartKind::DefinitionsPerCrate,
        ChartKind::InvocationsPerCrateNormalized,
        ChartKind::DefinitionsPerCrateNormalized,
        ChartKind::LinesPerRepo,
    ];

    /// Command-line name of the chart.
    pub fn name(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::DeriveUsage => "derive-usage",
            Self::InvocationsByType => "invocations-by-type",
            Self::DefinitionsByType => "definitions-by-type",
            Self::BuiltinAttributes => "builtin-attributes",
            Self::CustomAttributes => "custom-attributes",
            Self::FunctionLikeMacros => "function-like-macros",
            Self::DeriveMacros => "derive-macros",
            Self::InvocationsPerRepo => "invocations-per-repo",
            Self::DefinitionsPerRepo => "definitions-per-repo",
            Self::InvocationsPerRepoNormalized => "invocations-per-repo-normalized",
            Self::DefinitionsPerRepoNormalized => "definitions-per-repo-normalized",
            Self::InvocationsPerCrate => "invocations-per-crate",
            Self::DefinitionsPerCrate => "definitions-per-crate",
            Self::InvocationsPerCrateNormalized => "invocations-per-crate-normalized",
            Self::DefinitionsPerCrateNormalized => "definitions-per-crate-normalized",
            Self::LinesPerRepo => "lines-per-repo",
        }
    }

    /// Heading shown above the chart.
    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Rust Macro Analysis",
            Self::DeriveUsage => "Derives Per #[derive(...)] Attribute",
            Self::InvocationsByType => "Macro Invocation Count By Type",
            Self::DefinitionsByType => "Macro Definition Count By Type",
            Self::BuiltinAttributes => "Most Used Builtin Attribute Macros",
            Self::CustomAttributes => "Most Used Custom Attribute Macros (Top 20)",
            Self::FunctionLikeMacros => "Most Used Function-like and Declarative Macros (Top 20)",
            Self::DeriveMacros => "Most Used Derive Macros (Top 20)",
            Self::InvocationsPerRepo => "Macro Invocations Per Repository",
            Self::DefinitionsPerRepo => "Macro Definitions Per Repository",
            Self::InvocationsPerRepoNormalized => {
                "Macro Invocations Per Repository - Lines Normalized"
            }
            Self::DefinitionsPerRepoNormalized => {
                "Macro Definitions Per Repository - Lines Normalized"
            }
            Self::InvocationsPerCrate => "Macro Invocations Per Crate (Top 100)",
            Self::DefinitionsPerCrate => "Macro Definitions Per Crate (Top 100)",
            Self::InvocationsPerCrateNormalized => {
                "Macro Invocations Per Crate (Top 100) - Lines Normalized"
            }
            Self::DefinitionsPerCrateNormalized => {
                "Macro Definitions Per Crate (Top 100) - Lines Normalized"
            }
            Self::LinesPerRepo => "Lines Per Repository",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = MacroLensError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| MacroLensError::UnknownChart(value.to_string()))
    }
}

/// Crates analyzed, total invocations, total definitions and snapshot date.
pub fn overview(snapshot: &Snapshot) -> Overview {
    let totals = &snapshot.total_macro_usage;
    Overview {
        crates: snapshot.crate_count(),
        invocations: combined_total(&[
            &totals.macro_invocations,
            &totals.builtin_attribute_macro_invocations,
            &totals.attribute_macro_invocations,
            &totals.derive_macro_usage.derives,
        ]),
        definitions: combined_total(&[
            &totals.derive_macro_definitions,
            &totals.attribute_macro_definitions,
            &totals.declarative_macro_definitions,
            &totals.procedural_macro_definitions,
        ]),
        date: snapshot.generated_on(),
    }
}

/// Derive usage histogram and the analyzer's summary statistics.
pub fn derive_usage(snapshot: &Snapshot) -> DeriveUsageChart {
    let usage = &snapshot.derive_usage;
    DeriveUsageChart {
        histogram: derive_histogram(&usage.sorted_data)
            .into_iter()
            .map(|entry| ChartPoint::labelled(entry, identity))
            .collect(),
        frequencies: value_frequencies(&usage.sorted_data)
            .into_iter()
            .map(|(derives, attributes)| ChartPoint {
                key: derives.to_string(),
                label: format!("{derives} derives"),
                value: attributes,
            })
            .collect(),
        avg: usage.avg,
        median: usage.median,
        mode: usage.mode,
        max: usage.max,
        count: usage.count,
    }
}

/// Invocation count per macro kind.
///
/// Derives count attributes (`derive_macro_usage.count`), not listed derives.
pub fn invocations_by_type(snapshot: &Snapshot) -> Vec<ChartPoint<u64>> {
    let totals = &snapshot.total_macro_usage;
    vec![
        category("Derive Macros", totals.derive_macro_usage.count),
        category(
            "Attribute Macros",
            category_total_or_zero(&totals.attribute_macro_invocations),
        ),
        category(
            "Builtin Attribute Macros",
            category_total_or_zero(&totals.builtin_attribute_macro_invocations),
        ),
        category(
            "Function-like and Declarative Macros",
            category_total_or_zero(&totals.macro_invocations),
        ),
    ]
}

/// Definition count per macro kind.
pub fn definitions_by_type(snapshot: &Snapshot) -> Vec<ChartPoint<u64>> {
    let totals = &snapshot.total_macro_usage;
    vec![
        category(
            "Derive Macros",
            category_total_or_zero(&totals.derive_macro_definitions),
        ),
        category(
            "Attribute Macros",
            category_total_or_zero(&totals.attribute_macro_definitions),
        ),
        category(
            "Declarative Macros",
            category_total_or_zero(&totals.declarative_macro_definitions),
        ),
        category(
            "Function-like Macros",
            category_total_or_zero(&totals.procedural_macro_definitions),
        ),
    ]
}

/// The `limit` most used macros of a category.
pub fn most_used(usage: &MacroUsage, limit: usize) -> Vec<ChartPoint<u64>> {
    rank_usage(usage, RankOptions::top(limit))
        .into_iter()
        .map(|entry| ChartPoint::labelled(entry, identity))
        .collect()
}

/// Ranked repository counts labelled with repository names.
pub fn per_repo(series: &CountSeries, options: RankOptions) -> Vec<ChartPoint<u64>> {
    rank_pairs(series, options)
        .into_iter()
        .map(|entry| ChartPoint::labelled(entry, repo_display_name))
        .collect()
}

/// Ranked crate counts labelled with crate names.
pub fn per_crate(series: &CountSeries, options: RankOptions) -> Vec<ChartPoint<u64>> {
    rank_pairs(series, options)
        .into_iter()
        .map(|entry| ChartPoint::labelled(entry, crate_display_name))
        .collect()
}

/// Ranked per-line densities of repository counts.
pub fn per_repo_normalized(
    series: &CountSeries,
    lines: &SizeTable,
    options: RankOptions,
) -> Vec<ChartPoint<f64>> {
    rank(normalize(series, lines), options)
        .into_iter()
        .map(|entry| ChartPoint::labelled(entry, repo_display_name))
        .collect()
}

/// Ranked per-line densities of crate counts.
pub fn per_crate_normalized(
    series: &CountSeries,
    lines: &SizeTable,
    options: RankOptions,
) -> Vec<ChartPoint<f64>> {
    rank(normalize(series, lines), options)
        .into_iter()
        .map(|entry| ChartPoint::labelled(entry, crate_display_name))
        .collect()
}

/// Repositories ranked by lines of code.
pub fn lines_per_repo(snapshot: &Snapshot) -> Vec<ChartPoint<u64>> {
    rank(
        snapshot
            .lines_per_repo
            .iter()
            .map(|(key, lines)| Entry::new(key.as_str(), *lines)),
        RankOptions::all(),
    )
    .into_iter()
    .map(|entry| ChartPoint::labelled(entry, repo_display_name))
    .collect()
}

fn category(name: &str, value: u64) -> ChartPoint<u64> {
    ChartPoint {
        key: name.to_string(),
        label: name.to_string(),
        value,
    }
}

fn identity(key: &str) -> &str {
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::samples::sample_snapshot;
    use std::sync::Arc;

    fn labels<V>(points: &[ChartPoint<V>]) -> Vec<&str> {
        points.iter().map(|point| point.label.as_str()).collect()
    }

    #[test]
    fn overview_sums_categories() {
        let overview = overview(&sample_snapshot());
        assert_eq!(overview.crates, 4);
        assert_eq!(overview.invocations, 640 + 1250 + 120 + 920);
        assert_eq!(overview.definitions, 2 + 5 + 14 + 2);
        assert_eq!(overview.date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn overview_treats_empty_categories_as_zero() {
        let mut snapshot = sample_snapshot();
        snapshot.total_macro_usage.procedural_macro_definitions.clear();
        snapshot.total_macro_usage.derive_macro_usage.derives.clear();
        let overview = overview(&snapshot);
        assert_eq!(overview.definitions, 2 + 5 + 14);
        assert_eq!(overview.invocations, 640 + 1250 + 120);
    }

    #[test]
    fn derive_usage_keeps_statistics() {
        let chart = derive_usage(&sample_snapshot());
        assert_eq!(
            labels(&chart.histogram),
            vec!["1 derives", "2 derives", "3 derives", "4 derives"]
        );
        let counts: Vec<u64> = chart.histogram.iter().map(|point| point.value).collect();
        assert_eq!(counts, vec![3, 2, 1, 1]);
        assert_eq!(
            labels(&chart.frequencies),
            vec!["1 derives", "2 derives", "3 derives", "5 derives"]
        );
        let attributes: Vec<u64> = chart.frequencies.iter().map(|point| point.value).collect();
        assert_eq!(attributes, vec![3, 2, 1, 1]);
        assert_eq!(chart.mode, 1.0);
        assert_eq!(chart.max, 5.0);
        assert_eq!(chart.count, 7);
    }

    #[test]
    fn invocations_by_type_uses_attribute_count_for_derives() {
        let chart = invocations_by_type(&sample_snapshot());
        let values: Vec<(&str, u64)> = chart
            .iter()
            .map(|point| (point.label.as_str(), point.value))
            .collect();
        assert_eq!(
            values,
            vec![
                ("Derive Macros", 700),
                ("Attribute Macros", 120),
                ("Builtin Attribute Macros", 1250),
                ("Function-like and Declarative Macros", 640),
            ]
        );
    }

    #[test]
    fn definitions_by_type_maps_procedural_to_function_like() {
        let chart = definitions_by_type(&sample_snapshot());
        assert_eq!(chart[3].label, "Function-like Macros");
        assert_eq!(chart[3].value, 2);
        assert_eq!(chart[2].value, 14);
    }

    #[test]
    fn most_used_ranks_and_truncates() {
        let snapshot = sample_snapshot();
        let derives = most_used(&snapshot.total_macro_usage.derive_macro_usage.derives, 2);
        assert_eq!(labels(&derives), vec!["Debug", "Clone"]);
    }

    #[test]
    fn definitions_per_repo_drops_zero_rows() {
        let dashboard = Dashboard::from_snapshot(&sample_snapshot());
        assert_eq!(labels(&dashboard.definitions_per_repo), vec!["serde", "tokio"]);
        assert_eq!(
            labels(&dashboard.invocations_per_repo),
            vec!["tokio", "serde", "rustlings"]
        );
    }

    #[test]
    fn normalized_crates_rank_by_density() {
        let dashboard = Dashboard::from_snapshot(&sample_snapshot());
        let chart = &dashboard.invocations_per_crate_normalized;
        assert_eq!(
            labels(chart),
            vec!["serde_derive", "serde", "tokio", "rust-lang.rustlings"]
        );
        assert!((chart[0].value - 0.04).abs() < 1e-12);
        assert_eq!(chart[3].value, 0.0);
    }

    #[test]
    fn normalized_repo_definitions_drop_zero_ratios() {
        let dashboard = Dashboard::from_snapshot(&sample_snapshot());
        let chart = &dashboard.definitions_per_repo_normalized;
        assert_eq!(labels(chart), vec!["serde", "tokio"]);
        assert!((chart[0].value - 42.0 / 30_000.0).abs() < 1e-12);
    }

    #[test]
    fn absent_snapshot_builds_empty_dashboard() {
        for state in [SnapshotState::Pending, SnapshotState::Failed("offline".into())] {
            let dashboard = Dashboard::build(&state);
            assert!(!dashboard.loaded);
            assert_eq!(dashboard, Dashboard::default());
            for kind in ChartKind::ALL {
                match dashboard.chart(kind) {
                    ChartData::Counts(points) => assert!(points.is_empty()),
                    ChartData::Ratios(points) => assert!(points.is_empty()),
                    ChartData::Overview(overview) => assert_eq!(overview.crates, 0),
                    ChartData::DeriveUsage(chart) => assert!(chart.histogram.is_empty()),
                }
            }
        }
    }

    #[test]
    fn loaded_state_builds_full_dashboard() {
        let state = SnapshotState::Loaded(Arc::new(sample_snapshot()));
        let dashboard = Dashboard::build(&state);
        assert!(dashboard.loaded);
        assert_eq!(dashboard.lines_per_repo[0].label, "tokio");
        assert_eq!(dashboard.most_used_builtin_attributes[0].key, "derive");
    }

    #[test]
    fn chart_kinds_round_trip_names() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.name().parse::<ChartKind>().expect("kind"), kind);
        }
        assert!(matches!(
            "pie".parse::<ChartKind>(),
            Err(MacroLensError::UnknownChart(_))
        ));
    }

    #[test]
    fn display_label_falls_back_to_key() {
        let point = ChartPoint::labelled(Entry::new("no-dot", 3u64), repo_display_name);
        assert_eq!(point.label, "");
        assert_eq!(point.display_label(), "no-dot");
    }
}
