#![deny(missing_docs)]
//! MacroLens command-line interface.
//!
//! Fetches a macro usage snapshot once and renders the dashboard charts.

mod http;

use clap::{Args, Parser, Subcommand, ValueEnum};
use http::HttpSnapshotSource;
use macrolens_core::{
    ChartKind, Dashboard, FileSnapshotSource, SnapshotCache, SnapshotSource, SnapshotState,
    render_chart_markdown, render_chart_text, render_json, render_markdown, render_text,
};
use std::path::PathBuf;

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

const DEFAULT_DATA_URL: &str = "http://127.0.0.1:8080/data";

#[derive(Parser)]
#[command(name = "macrolens", version, about = "MacroLens dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct SourceArgs {
    /// Endpoint serving the snapshot document.
    #[arg(long, env = "MACROLENS_DATA_URL", default_value = DEFAULT_DATA_URL)]
    url: String,
    /// Read the snapshot from a local JSON file instead of the endpoint.
    #[arg(long, env = "MACROLENS_DATA_FILE")]
    file: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct OutputArgs {
    /// Output format for report data.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the report to a file instead of stdout.
    #[arg(long = "report-output")]
    report_output: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every dashboard chart.
    Dashboard {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        report: OutputArgs,
    },
    /// Render a single chart.
    Chart {
        /// Chart to render, e.g. `derive-usage` or `definitions-per-repo`.
        chart: ChartKind,
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        report: OutputArgs,
    },
    /// List the chart names accepted by `chart`.
    Charts,
}

#[cfg(not(test))]
#[tokio::main]
async fn main() -> CliResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Dashboard { source, report } => {
            let selection = resolve_source_args(&source)?;
            run_dashboard(selection, report).await?
        }
        Commands::Chart {
            chart,
            source,
            report,
        } => {
            let selection = resolve_source_args(&source)?;
            run_chart(selection, chart, report).await?
        }
        Commands::Charts => print!("{}", render_chart_list()),
    }

    Ok(())
}

#[cfg(test)]
fn main() {}

enum SnapshotSelection {
    Http(String),
    File(PathBuf),
}

impl SnapshotSelection {
    fn into_source(self) -> Box<dyn SnapshotSource + Send> {
        match self {
            Self::Http(url) => Box::new(HttpSnapshotSource::new(url)),
            Self::File(path) => Box::new(FileSnapshotSource::new(path)),
        }
    }
}

fn resolve_source_args(source: &SourceArgs) -> CliResult<SnapshotSelection> {
    if let Some(file) = source.file.clone() {
        return Ok(SnapshotSelection::File(file));
    }
    let trimmed = source.url.trim();
    if trimmed.is_empty() {
        return Err("url cannot be empty".into());
    }
    Ok(SnapshotSelection::Http(trimmed.to_string()))
}

/// Fetch the session snapshot on the blocking pool.
async fn load_snapshot(selection: SnapshotSelection) -> CliResult<SnapshotState> {
    let state = tokio::task::spawn_blocking(move || {
        let cache = SnapshotCache::new(selection.into_source());
        cache.load()
    })
    .await?;
    if let SnapshotState::Failed(reason) = &state {
        log::warn!("rendering empty charts: {reason}");
    }
    Ok(state)
}

async fn run_dashboard(selection: SnapshotSelection, output: OutputArgs) -> CliResult<()> {
    let state = load_snapshot(selection).await?;
    let dashboard = Dashboard::build(&state);
    emit_dashboard(&dashboard, &output).await
}

async fn run_chart(
    selection: SnapshotSelection,
    kind: ChartKind,
    output: OutputArgs,
) -> CliResult<()> {
    let state = load_snapshot(selection).await?;
    let dashboard = Dashboard::build(&state);
    emit_chart(&dashboard, kind, &output).await
}

async fn emit_dashboard(dashboard: &Dashboard, output: &OutputArgs) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Text => render_text(dashboard),
        OutputFormat::Markdown => render_markdown(dashboard),
        OutputFormat::Json => render_json(dashboard)?,
    };
    emit_output(output, contents).await
}

async fn emit_chart(dashboard: &Dashboard, kind: ChartKind, output: &OutputArgs) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Text => render_chart_text(dashboard, kind),
        OutputFormat::Markdown => render_chart_markdown(dashboard, kind),
        OutputFormat::Json => render_json(&dashboard.chart(kind))?,
    };
    emit_output(output, contents).await
}

async fn emit_output(output: &OutputArgs, contents: String) -> CliResult<()> {
    if let Some(path) = &output.report_output {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await?;
    } else {
        print!("{contents}");
    }
    Ok(())
}

fn render_chart_list() -> String {
    ChartKind::ALL
        .iter()
        .map(|kind| format!("{:<36} {}\n", kind.name(), kind.title()))
        .collect()
}
