use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use ileq_core::{Bounds, Input, Tag};

use crate::config::{FileConfig, IntervalConfig};

/// Solve the interval equation [A]x = [b] under epistemic or ontic readings.
#[derive(Debug, Parser)]
#[command(name = "ileq", version, about, allow_negative_numbers = true)]
pub struct Cli {
    /// TOML file with default intervals, tags, and solver tolerances
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lower bound of [A]
    #[arg(long)]
    pub a_min: Option<f64>,

    /// Upper bound of [A]
    #[arg(long)]
    pub a_max: Option<f64>,

    /// Reading of [A]: epistemic or ontic
    #[arg(long)]
    pub tag_a: Option<Tag>,

    /// Lower bound of [b]
    #[arg(long)]
    pub b_min: Option<f64>,

    /// Upper bound of [b]
    #[arg(long)]
    pub b_max: Option<f64>,

    /// Reading of [b]: epistemic or ontic
    #[arg(long)]
    pub tag_b: Option<Tag>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Open the interactive explorer after printing
    #[arg(long)]
    pub gui: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable report
    Text,
    /// Serialized evaluation
    Json,
}

impl Cli {
    /// Resolves the input: built-in defaults, then the config file, then flags.
    #[must_use]
    pub fn input(&self, file: &FileConfig) -> Input {
        let defaults = Input::default();
        let flags_a = IntervalConfig {
            min: self.a_min,
            max: self.a_max,
            tag: self.tag_a,
        };
        let flags_b = IntervalConfig {
            min: self.b_min,
            max: self.b_max,
            tag: self.tag_b,
        };

        let (a, tag_a) = layer(defaults.a, defaults.tag_a, &[file.a, flags_a]);
        let (b, tag_b) = layer(defaults.b, defaults.tag_b, &[file.b, flags_b]);

        Input { a, b, tag_a, tag_b }
    }

    /// Returns the log filter used when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Applies each override in order; later entries win.
fn layer(bounds: Bounds, tag: Tag, overrides: &[IntervalConfig]) -> (Bounds, Tag) {
    overrides
        .iter()
        .fold((bounds, tag), |(bounds, tag), over| {
            (
                Bounds::new(over.min.unwrap_or(bounds.min), over.max.unwrap_or(bounds.max)),
                over.tag.unwrap_or(tag),
            )
        })
}
