//! `ileq`: solve `[A]x = [b]` from the command line.

mod cli;
mod config;
mod error;

use std::process::ExitCode;

use clap::Parser;
use ileq_core::{Evaluation, Report, evaluate};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Format},
    config::FileConfig,
    error::{CliError, Result},
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let file = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            FileConfig::load(path)?
        }
        None => FileConfig::default(),
    };
    file.solver.validate().map_err(CliError::Solver)?;

    let input = cli.input(&file);
    let evaluation = evaluate(&input, &file.solver)?;

    println!("{}", render(&evaluation, cli.format)?);

    if cli.gui {
        open_explorer(input, file.solver)?;
    }

    Ok(())
}

/// Formats an evaluation for standard output.
fn render(evaluation: &Evaluation, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(Report::new(evaluation).to_string()),
        Format::Json => Ok(serde_json::to_string_pretty(evaluation)?),
    }
}

#[cfg(feature = "gui")]
fn open_explorer(input: ileq_core::Input, config: ileq_core::Config) -> Result<()> {
    ileq_plot::ExplorerApp::new(input, config)
        .run("Interval linear equations: Ax = b")
        .map_err(|err| CliError::Gui(err.to_string()))
}

#[cfg(not(feature = "gui"))]
fn open_explorer(_input: ileq_core::Input, _config: ileq_core::Config) -> Result<()> {
    Err(CliError::Gui("built without the `gui` feature".into()))
}
