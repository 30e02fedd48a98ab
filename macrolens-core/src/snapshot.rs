//! The snapshot document produced by the macro analyzer.
//!
//! The analyzer serializes snake_case field names. The camelCase spellings are
//! accepted as aliases so documents produced by other tooling decode as well.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A mapping of macro names to their occurrence counts.
pub type MacroUsage = BTreeMap<String, u64>;

/// A mapping of repository or crate keys to a size measure (lines or characters).
pub type SizeTable = BTreeMap<String, u64>;

/// Ordered `(key, count)` pairs, serialized as two-element JSON arrays.
pub type CountSeries = Vec<(String, u64)>;

/// Distribution of the number of derives listed in a single `#[derive(...)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeriveUsage {
    /// One entry per derive attribute, ascending.
    #[serde(alias = "sortedData")]
    pub sorted_data: Vec<u64>,
    /// Mean derives per attribute.
    pub avg: f64,
    /// Median derives per attribute.
    pub median: f64,
    /// Most common derives-per-attribute value.
    pub mode: f64,
    /// Largest derives-per-attribute value.
    pub max: f64,
    /// Number of derive attributes observed.
    pub count: u64,
}

/// Derive invocations across the corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeriveMacroUsage {
    /// Derive name to number of times it was listed.
    pub derives: MacroUsage,
    /// Number of `#[derive(...)]` attributes.
    pub count: u64,
}

/// Corpus-wide macro usage, split by macro kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// `#[proc_macro_derive]` definitions.
    #[serde(alias = "deriveMacroDefinitions")]
    pub derive_macro_definitions: MacroUsage,
    /// Function-like `#[proc_macro]` definitions.
    #[serde(alias = "proceduralMacroDefinitions")]
    pub procedural_macro_definitions: MacroUsage,
    /// `#[proc_macro_attribute]` definitions.
    #[serde(alias = "attributeMacroDefinitions")]
    pub attribute_macro_definitions: MacroUsage,
    /// `macro_rules!` definitions.
    #[serde(alias = "declarativeMacroDefinitions")]
    pub declarative_macro_definitions: MacroUsage,
    /// Function-like and declarative macro invocations.
    #[serde(alias = "macroInvocations")]
    pub macro_invocations: MacroUsage,
    /// Invocations of attributes built into the compiler.
    #[serde(alias = "builtinAttributeMacroInvocations")]
    pub builtin_attribute_macro_invocations: MacroUsage,
    /// Invocations of custom attribute macros.
    #[serde(alias = "attributeMacroInvocations")]
    pub attribute_macro_invocations: MacroUsage,
    /// Derive usage.
    #[serde(alias = "deriveMacroUsage")]
    pub derive_macro_usage: DeriveMacroUsage,
}

/// The statistical dataset rendered by the dashboard.
///
/// A snapshot is produced once by the analyzer and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Macro definitions per repository key (`owner.repo`).
    #[serde(alias = "macroDefinitionsPerRepo")]
    pub macro_definitions_per_repo: CountSeries,
    /// Macro invocations per repository key.
    #[serde(alias = "macroInvocationsPerRepo")]
    pub macro_invocations_per_repo: CountSeries,
    /// Macro definitions per crate path.
    #[serde(alias = "macroDefinitionsPerCrate")]
    pub macro_definitions_per_crate: CountSeries,
    /// Macro invocations per crate path.
    #[serde(alias = "macroInvocationsPerCrate")]
    pub macro_invocations_per_crate: CountSeries,
    /// Lines of code per repository key.
    #[serde(alias = "linesPerRepo")]
    pub lines_per_repo: SizeTable,
    /// Lines of code per crate path.
    #[serde(alias = "linesPerCrate")]
    pub lines_per_crate: SizeTable,
    /// Characters of code per repository key.
    #[serde(alias = "charactersPerRepo")]
    pub characters_per_repo: SizeTable,
    /// Characters of code per crate path.
    #[serde(alias = "charactersPerCrate")]
    pub characters_per_crate: SizeTable,
    /// Derives-per-attribute distribution.
    #[serde(alias = "deriveUsage")]
    pub derive_usage: DeriveUsage,
    /// Corpus-wide usage by macro kind.
    #[serde(alias = "totalMacroUsage")]
    pub total_macro_usage: MacroTotals,
    /// Generation timestamp, ISO-8601.
    pub date: String,
}

impl Snapshot {
    /// Decode a snapshot from its JSON document.
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Number of crates the analyzer covered.
    pub fn crate_count(&self) -> usize {
        self.macro_invocations_per_crate.len()
    }

    /// Calendar date the snapshot was generated on, if `date` parses.
    pub fn generated_on(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|timestamp| timestamp.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }
}

#[cfg(test)]
pub(crate) mod samples {
    use super::Snapshot;

    pub(crate) const SAMPLE_JSON: &str =
        include_str!("../tests/fixtures/snapshot.json");

    pub(crate) fn sample_snapshot() -> Snapshot {
        Snapshot::from_json(SAMPLE_JSON).expect("sample snapshot")
    }
}

#[cfg(test)]
mod tests {
    use super::samples::{SAMPLE_JSON, sample_snapshot};
    use super::*;

    #[test]
    fn decodes_snake_case_document() {
        let snapshot = sample_snapshot();
        assert_eq!(
            snapshot.macro_definitions_per_repo[0],
            ("serde-rs.serde".to_string(), 42)
        );
        assert_eq!(snapshot.lines_per_repo["tokio-rs.tokio"], 100_000);
        assert_eq!(snapshot.derive_usage.sorted_data, vec![1, 1, 1, 2, 2, 3, 5]);
        assert_eq!(snapshot.total_macro_usage.derive_macro_usage.count, 700);
    }

    #[test]
    fn decodes_camel_case_aliases() {
        let document = r#"{
            "macroDefinitionsPerRepo": [["a.repo1", 10], ["b.repo2", 0]],
            "macroInvocationsPerRepo": [],
            "macroDefinitionsPerCrate": [],
            "macroInvocationsPerCrate": [["a.repo1/core/", 3]],
            "linesPerRepo": {"a.repo1": 100},
            "linesPerCrate": {},
            "charactersPerRepo": {},
            "charactersPerCrate": {},
            "deriveUsage": {"sortedData": [1, 2], "avg": 1.5, "median": 1.5, "mode": 1, "max": 2, "count": 2},
            "totalMacroUsage": {
                "deriveMacroDefinitions": {},
                "proceduralMacroDefinitions": {},
                "attributeMacroDefinitions": {},
                "declarativeMacroDefinitions": {},
                "macroInvocations": {"vec": 4},
                "builtinAttributeMacroInvocations": {},
                "attributeMacroInvocations": {},
                "deriveMacroUsage": {"derives": {"Debug": 2}, "count": 1}
            },
            "date": "2024-01-02"
        }"#;

        let snapshot = Snapshot::from_json(document).expect("camelCase snapshot");
        assert_eq!(snapshot.macro_definitions_per_repo.len(), 2);
        assert_eq!(snapshot.derive_usage.sorted_data, vec![1, 2]);
        assert_eq!(snapshot.total_macro_usage.macro_invocations["vec"], 4);
        assert_eq!(snapshot.crate_count(), 1);
    }

    #[test]
    fn decodes_fractional_summary_statistics() {
        let mut document: serde_json::Value =
            serde_json::from_str(SAMPLE_JSON).expect("sample json");
        document["derive_usage"]["mode"] = serde_json::json!(2.0);
        document["derive_usage"]["max"] = serde_json::json!(5.5);

        let snapshot = Snapshot::from_json(&document.to_string()).expect("snapshot");
        assert_eq!(snapshot.derive_usage.mode, 2.0);
        assert_eq!(snapshot.derive_usage.max, 5.5);
    }

    #[test]
    fn rejects_malformed_pairs() {
        let document = sample_snapshot_json_with("\"macro_definitions_per_repo\": [[\"a.repo1\"]]");
        assert!(Snapshot::from_json(&document).is_err());
    }

    #[test]
    fn generated_on_accepts_rfc3339_and_plain_dates() {
        let mut snapshot = Snapshot {
            date: "2024-03-01T12:00:00Z".to_string(),
            ..Snapshot::default()
        };
        assert_eq!(snapshot.generated_on(), NaiveDate::from_ymd_opt(2024, 3, 1));

        snapshot.date = "2023-11-20".to_string();
        assert_eq!(snapshot.generated_on(), NaiveDate::from_ymd_opt(2023, 11, 20));

        snapshot.date = "yesterday".to_string();
        assert_eq!(snapshot.generated_on(), None);
    }

    #[test]
    fn serializes_pairs_as_arrays() {
        let snapshot = Snapshot {
            macro_definitions_per_repo: vec![("a.repo1".to_string(), 10)],
            ..Snapshot::default()
        };
        let value = serde_json::to_value(&snapshot).expect("serialize");
        assert_eq!(
            value["macro_definitions_per_repo"],
            serde_json::json!([["a.repo1", 10]])
        );
    }

    fn sample_snapshot_json_with(replacement: &str) -> String {
        let mut value: serde_json::Value =
            serde_json::from_str(super::samples::SAMPLE_JSON).expect("sample json");
        let patch: serde_json::Value =
            serde_json::from_str(&format!("{{{replacement}}}")).expect("patch json");
        if let (Some(target), Some(patch)) = (value.as_object_mut(), patch.as_object()) {
            for (key, field) in patch {
                target.insert(key.clone(), field.clone());
            }
        }
        value.to_string()
    }
}
