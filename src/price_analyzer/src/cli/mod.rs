//! Command-line front end: argument definitions and command dispatch.

pub mod commands;
pub mod params;

use std::io::Write;

use anyhow::Context;
use feature_extractor::{compute_metrics, compute_overlays};
use tracing::info;

pub use commands::{Cli, Commands, InputArgs};
use params::{effective_policy, effective_range, load_input};

use crate::{
    config::AnalyzerConfig,
    report::{AnalysisReport, MetricsReport, OverlayReport, check_policy, write_json},
};

/// Runs `command` against `config`, writing the JSON result to `out`.
pub fn execute(command: &Commands, config: &AnalyzerConfig, out: impl Write) -> anyhow::Result<()> {
    match command {
        Commands::Metrics { input, strict } => {
            let series = load_input(input)?;
            let summary = compute_metrics(&series);
            check_policy(&summary, effective_policy(*strict, config))?;

            write_json(out, &MetricsReport::new(&series, &summary))
                .context("write metrics report")?;
            info!(symbol = series.symbol(), "metrics written");
        }
        Commands::Overlays { input, range } => {
            let series = load_input(input)?;
            let overlays = compute_overlays(&series);
            let range = effective_range(*range, config);

            write_json(out, &OverlayReport::new(&series, &overlays, range))
                .context("write overlay report")?;
            info!(symbol = series.symbol(), %range, "overlays written");
        }
        Commands::Analyze {
            input,
            range,
            strict,
        } => {
            let series = load_input(input)?;
            let summary = compute_metrics(&series);
            check_policy(&summary, effective_policy(*strict, config))?;
            let overlays = compute_overlays(&series);
            let range = effective_range(*range, config);

            let report = AnalysisReport {
                metrics: MetricsReport::new(&series, &summary),
                overlays: OverlayReport::new(&series, &overlays, range),
            };
            write_json(out, &report).context("write analysis report")?;
            info!(symbol = series.symbol(), %range, "analysis written");
        }
    }
    Ok(())
}
