use feature_extractor::{DisplayRange, PriceSeries};

use super::commands::InputArgs;
use crate::{
    config::{AnalyzerConfig, NonFinitePolicy},
    errors::LoadError,
    io::source_for,
};

/// `--range` when given, otherwise the configured default.
pub fn effective_range(flag: Option<DisplayRange>, config: &AnalyzerConfig) -> DisplayRange {
    flag.unwrap_or(config.display.range)
}

/// `--strict` forces [`NonFinitePolicy::Reject`]; otherwise the config decides.
pub fn effective_policy(strict: bool, config: &AnalyzerConfig) -> NonFinitePolicy {
    if strict {
        NonFinitePolicy::Reject
    } else {
        config.metrics.non_finite
    }
}

pub fn load_input(args: &InputArgs) -> Result<PriceSeries, LoadError> {
    source_for(&args.input, args.format, args.symbol.as_str())?.load()
}
