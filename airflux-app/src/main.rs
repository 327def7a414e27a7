//! `airflux` -- live air-quality monitor for an intake/exhaust air
//! stream pair.
//!
//! Polls a local sensor bridge for readings and falls back to a
//! synthetic bounded random walk whenever the bridge is unreachable.
//! Optionally logs every tick to CSV and renders charts from the log at
//! the end of a bounded session.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod monitor;
mod plotting;
mod poller;
mod render;

#[derive(Debug, Parser)]
#[command(name = "airflux", version, about = "Intake/exhaust air-quality monitor")]
struct Cli {
    /// Path to the monitor YAML config.
    #[arg(long, default_value = "airflux-app/config.yaml")]
    config: String,

    /// Never poll the sensor bridge; run on synthetic data only.
    #[arg(long)]
    simulate: bool,

    /// Stop after this many refresh ticks, then render charts if
    /// configured.
    #[arg(long)]
    ticks: Option<u64>,

    /// Fixed random seed for the synthetic walk.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airflux_app=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = config::load_settings(&cli.config)?;
    tracing::info!(
        endpoint = %settings.endpoint_url,
        refresh_secs = settings.refresh_secs,
        simulate = cli.simulate,
        "Starting airflux monitor"
    );

    let opts = monitor::RunOptions {
        simulate: cli.simulate,
        ticks: cli.ticks,
        seed: cli.seed,
    };

    monitor::run(&settings, opts, render::ConsoleRenderer::stdout()).await
}
