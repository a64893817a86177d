//! SUMMA run launcher.
//!
//! Configures and launches single-site runs of the containerized SUMMA
//! model:
//! - Validated model decisions and run periods from a YAML launch file
//! - Atomic generation of the decisions file and file manager
//! - Docker invocation of the model binary (or --dry-run)
//! - Optional forcing-dataset summary for sanity checking a run's period

mod config;
mod docker;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

use summa_settings::{write_run_settings, SettingsLayout};

use config::LaunchConfig;
use docker::DockerInvocation;

#[derive(Parser, Debug)]
#[command(name = "launcher")]
#[command(about = "Configures and launches single-site SUMMA runs")]
struct Args {
    /// Launch configuration file (YAML)
    #[arg(short, long, env = "LAUNCH_CONFIG", default_value = "launch.yaml")]
    config: PathBuf,

    /// Only the run with this label (default: all configured runs)
    #[arg(short, long)]
    run: Option<String>,

    /// Write settings and print the docker command without executing it
    #[arg(long)]
    dry_run: bool,

    /// Summarize the site's forcing file before launching
    #[arg(long)]
    forcing_summary: bool,

    /// Emit the forcing summary as JSON instead of log lines
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting SUMMA run launcher");

    let config = LaunchConfig::load(&args.config)?;
    let layout = SettingsLayout::new(config.settings_dir());
    let container_paths = config.container_paths();

    if args.forcing_summary {
        summarize_forcing(&config, args.json)?;
    }

    let mut launched = 0usize;
    for run in &config.runs {
        if let Some(only) = &args.run {
            if &run.label != only {
                continue;
            }
        }

        let run_id = Uuid::new_v4();
        let descriptor = config.descriptor(run)?;
        let decisions = config.decisions(run)?;
        info!(
            %run_id,
            site = %descriptor.site,
            label = %descriptor.label,
            start = %descriptor.period.start_formatted(),
            end = %descriptor.period.end_formatted(),
            decisions = decisions.len(),
            "configuring run"
        );

        let files = write_run_settings(&layout, &descriptor, &decisions, &container_paths)
            .with_context(|| format!("Failed to write settings for run '{}'", run.label))?;
        info!(
            %run_id,
            file_manager = %files.file_manager.display(),
            "settings written"
        );

        let invocation = DockerInvocation::for_run(&config, &descriptor.label);
        if args.dry_run {
            println!("{}", invocation.command_line());
        } else {
            invocation
                .execute()
                .await
                .with_context(|| format!("Run '{}' failed", run.label))?;
        }
        launched += 1;
    }

    if launched == 0 {
        warn!(requested = ?args.run, "no runs matched");
    } else {
        info!(runs = launched, dry_run = args.dry_run, "done");
    }
    Ok(())
}

/// Load the configured forcing file and report per-variable statistics.
fn summarize_forcing(config: &LaunchConfig, as_json: bool) -> Result<()> {
    let name = config
        .forcing_file
        .as_deref()
        .context("forcing_summary requested but no forcing_file configured")?;
    let path = config.input_dir().join(name);
    let dataset = forcing_netcdf::load_forcing(&path)
        .with_context(|| format!("Failed to load forcing file {}", path.display()))?;
    let summary = dataset.summary()?;

    if as_json {
        let value = serde_json::json!({
            "file": path.display().to_string(),
            "start": summary.start.to_rfc3339(),
            "end": summary.end.to_rfc3339(),
            "steps": summary.steps,
            "variables": summary.variables.iter().map(|v| serde_json::json!({
                "name": v.name,
                "units": v.units,
                "min": v.min,
                "max": v.max,
                "mean": v.mean,
                "missing": v.missing,
            })).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    info!(
        file = %path.display(),
        start = %summary.start,
        end = %summary.end,
        steps = summary.steps,
        "forcing dataset"
    );
    for v in &summary.variables {
        info!(
            variable = %v.name,
            units = v.units.as_deref().unwrap_or("-"),
            min = v.min,
            max = v.max,
            mean = v.mean,
            missing = v.missing,
            "forcing variable"
        );
    }
    Ok(())
}
