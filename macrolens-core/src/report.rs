//! Report formatting utilities for MacroLens outputs.

use std::fmt::Write;

use serde::Serialize;

use crate::dashboard::{ChartData, ChartKind, ChartPoint, Dashboard, DeriveUsageChart, Overview};

const UNAVAILABLE: &str = "Snapshot unavailable; charts are empty.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Text,
    Markdown,
}

/// Render every dashboard chart as plain text.
pub fn render_text(dashboard: &Dashboard) -> String {
    render_charts(dashboard, &ChartKind::ALL, Style::Text)
}

/// Render every dashboard chart as Markdown.
pub fn render_markdown(dashboard: &Dashboard) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# MacroLens Dashboard\n");
    output.push_str(&render_charts(dashboard, &ChartKind::ALL, Style::Markdown));
    output
}

/// Render one chart as plain text.
pub fn render_chart_text(dashboard: &Dashboard, kind: ChartKind) -> String {
    render_charts(dashboard, &[kind], Style::Text)
}

/// Render one chart as Markdown.
pub fn render_chart_markdown(dashboard: &Dashboard, kind: ChartKind) -> String {
    render_charts(dashboard, &[kind], Style::Markdown)
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

fn render_charts(dashboard: &Dashboard, kinds: &[ChartKind], style: Style) -> String {
    let mut output = String::new();
    if !dashboard.loaded {
        let _ = writeln!(output, "{UNAVAILABLE}\n");
    }
    for kind in kinds {
        append_heading(&mut output, kind.title(), style);
        match dashboard.chart(*kind) {
            ChartData::Overview(overview) => append_overview(&mut output, overview, style),
            ChartData::DeriveUsage(chart) => append_derive_usage(&mut output, chart, style),
            ChartData::Counts(points) => append_points(&mut output, points, style, |value| {
                value.to_string()
            }),
            ChartData::Ratios(points) => append_points(&mut output, points, style, |value| {
                format!("{value:.6}")
            }),
        }
        let _ = writeln!(output);
    }
    output
}

fn append_heading(output: &mut String, title: &str, style: Style) {
    match style {
        Style::Text => {
            let _ = writeln!(output, "{title}");
            let _ = writeln!(output, "{}", "-".repeat(title.chars().count()));
        }
        Style::Markdown => {
            let _ = writeln!(output, "## {title}\n");
        }
    }
}

fn append_subheading(output: &mut String, title: &str, style: Style) {
    match style {
        Style::Text => {
            let _ = writeln!(output, "{title}:");
        }
        Style::Markdown => {
            let _ = writeln!(output, "\n### {title}\n");
        }
    }
}

fn append_field(output: &mut String, name: &str, value: impl std::fmt::Display, style: Style) {
    match style {
        Style::Text => {
            let _ = writeln!(output, "{name}: {value}");
        }
        Style::Markdown => {
            let _ = writeln!(output, "- **{name}**: {value}");
        }
    }
}

fn append_overview(output: &mut String, overview: &Overview, style: Style) {
    let date = overview
        .date
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    append_field(output, "As of", date, style);
    append_field(output, "Crates analyzed", overview.crates, style);
    append_field(output, "Macro invocations", overview.invocations, style);
    append_field(output, "Macro definitions", overview.definitions, style);
}

fn append_derive_usage(output: &mut String, chart: &DeriveUsageChart, style: Style) {
    append_points(output, &chart.histogram, style, |value| value.to_string());
    append_subheading(output, "Attributes by derive count", style);
    append_points(output, &chart.frequencies, style, |value| value.to_string());
    append_field(output, "Average", chart.avg, style);
    append_field(output, "Median", chart.median, style);
    append_field(output, "Mode", chart.mode, style);
    append_field(output, "Max", chart.max, style);
}

fn append_points<V: Copy>(
    output: &mut String,
    points: &[ChartPoint<V>],
    style: Style,
    format_value: impl Fn(V) -> String,
) {
    if points.is_empty() {
        let _ = writeln!(output, "No data.");
        return;
    }
    for point in points {
        let value = format_value(point.value);
        match style {
            Style::Text => {
                let _ = writeln!(output, "{:<40} {value}", point.display_label());
            }
            Style::Markdown => {
                let _ = writeln!(output, "- {}: {value}", point.display_label());
            }
        }
    }
}
