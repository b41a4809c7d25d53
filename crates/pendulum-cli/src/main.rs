// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — Command Line
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `pendulum` - period analysis of a simple pendulum across an amplitude range.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pendulum_core::pipeline::{run, run_parallel};
use pendulum_core::results::ResultSet;
use pendulum_core::verify::verify;
use pendulum_types::config::PendulumConfig;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const DATA_FILE: &str = "data.json";
const SUMMARY_FILE: &str = "summary.json";

#[derive(Parser)]
#[command(name = "pendulum")]
#[command(version)]
#[command(about = "Compare small-angle, series, numerical and exact pendulum periods")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON configuration file (reference configuration if omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the period analysis and print the summary
    Run {
        /// Directory receiving data.json and summary.json
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Evaluate samples on the rayon thread pool
        #[arg(long)]
        parallel: bool,
    },

    /// Validate configuration file
    Validate,

    /// Run the verification checks and report the direct-grid endpoint bias
    Verify,

    /// Show example configuration
    Example,
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

fn load_config(path: Option<&Path>) -> Result<PendulumConfig> {
    match path {
        Some(p) => PendulumConfig::from_file(p)
            .with_context(|| format!("Failed to load config from {p:?}")),
        None => {
            info!("No --config given, using the reference configuration");
            Ok(PendulumConfig::reference())
        }
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text).with_context(|| format!("Failed to write {path:?}"))
}

/// Write `data.json` (columnar) and `summary.json` into `dir`, creating it if needed.
fn write_outputs(dir: &Path, set: &ResultSet) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {dir:?}"))?;
    let data = dir.join(DATA_FILE);
    let summary = dir.join(SUMMARY_FILE);
    write_json(&data, &set.columns())?;
    write_json(&summary, &set.summary)?;
    Ok((data, summary))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Example => {
            println!("{}", serde_json::to_string_pretty(&PendulumConfig::reference())?);
        }

        Commands::Validate => {
            let config = load_config(cli.config.as_deref())?;
            info!("Configuration is valid");
            info!(
                "  Amplitudes: {} samples over [{}°, {}°]",
                config.sample_count, config.theta_low_deg, config.theta_high_deg
            );
            info!(
                "  Quadrature: {} Simpson steps, ε = {:e}",
                config.integral_steps, config.epsilon
            );
        }

        Commands::Run { output, parallel } => {
            let config = load_config(cli.config.as_deref())?;
            let set = if parallel {
                run_parallel(&config)
            } else {
                run(&config)
            }
            .context("Period analysis failed")?;

            if let Some(dir) = output {
                let (data, summary) = write_outputs(&dir, &set)?;
                info!("Wrote {} and {}", data.display(), summary.display());
            }
            println!("{}", serde_json::to_string_pretty(&set.summary)?);
        }

        Commands::Verify => {
            let config = load_config(cli.config.as_deref())?;
            let report = verify(&config).context("Verification could not run")?;
            for check in &report.checks {
                let mark = if check.passed { "PASS" } else { "FAIL" };
                println!(
                    "{mark}  {:<18} θ0 = {:>7.3}°  measured = {:.6e}",
                    check.name, check.theta0_deg, check.measured
                );
            }
            let e = &report.endpoint;
            println!(
                "INFO  {:<18} θ0 = {:>7.3}°  clamped = {}/{}  relative bias = {:.3e}  T = {:.6} s",
                "direct_grid",
                e.theta0_deg,
                e.clamped_points,
                e.steps + 1,
                e.relative_bias,
                e.direct_period
            );
            if !report.all_passed() {
                bail!("verification failed");
            }
        }
    }

    Ok(())
}
