//! Vitrine CLI
//!
//! - `vitrine run <scenario.json>` replays a headless carousel scenario and
//!   exits non-zero when an assertion fails
//! - `vitrine config` prints the effective configuration, or writes a default
//!   `vitrine.toml` with `--init`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use vitrine_app::config::CONFIG_FILE;
use vitrine_app::{run_loaded_scenario, HeadlessScenario, VitrineConfig};

/// Headless tooling for the Vitrine portfolio widgets
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Replay carousel scenarios and manage vitrine.toml")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a headless scenario file
    Run {
        /// Scenario JSON file
        scenario: PathBuf,

        /// vitrine.toml, or a directory containing one
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also save the JSON report to this file
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
    /// Show the effective configuration
    Config {
        /// vitrine.toml, or a directory containing one
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write a default vitrine.toml into this directory
        #[arg(long, value_name = "DIR")]
        init: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            scenario,
            config,
            report,
        } => cmd_run(&scenario, config.as_deref(), report.as_deref()),
        Command::Config { config, init } => {
            cmd_config(config.as_deref(), init.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<VitrineConfig> {
    match path {
        Some(path) => VitrineConfig::load_from_dir(path),
        None => Ok(VitrineConfig::default()),
    }
}

fn cmd_run(scenario_path: &Path, config: Option<&Path>, report: Option<&Path>) -> Result<ExitCode> {
    let config = load_config(config)?;
    let scenario = HeadlessScenario::from_path(scenario_path)?;
    tracing::info!(
        scenario = %scenario_path.display(),
        steps = scenario.steps.len(),
        "Replaying scenario"
    );

    let outcome = run_loaded_scenario(&scenario, &config)?;
    let result = outcome.report();

    result.write_to_writer(std::io::stdout().lock())?;
    if let Some(path) = report {
        result
            .save(path)
            .with_context(|| format!("Failed to save report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Report written");
    }

    if outcome.is_failed() {
        tracing::error!(
            index = result.carousel.index,
            phase = ?result.carousel.phase,
            "{}",
            result.summary()
        );
        Ok(ExitCode::FAILURE)
    } else {
        tracing::info!("{}", result.summary());
        Ok(ExitCode::SUCCESS)
    }
}

fn cmd_config(config: Option<&Path>, init: Option<&Path>) -> Result<()> {
    if let Some(dir) = init {
        if dir.join(CONFIG_FILE).exists() {
            anyhow::bail!("{CONFIG_FILE} already exists in {}", dir.display());
        }
        VitrineConfig::default().write_to_dir(dir)?;
        tracing::info!(dir = %dir.display(), "Created vitrine.toml");
        return Ok(());
    }

    let config = load_config(config)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
