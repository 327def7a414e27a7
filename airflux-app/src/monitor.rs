//! The monitor loop: one task, two steady timers.
//!
//! The refresh ticker advances the synthetic walk on the configured
//! cadence; the poll ticker fetches the bridge on its own fixed cadence.
//! Both race to replace the same live pair, and each update writes a
//! whole new pair, so there is no partial-update visibility and no
//! locking. Both intervals are created once at startup and never
//! re-armed.

use std::time::Duration;

use airflux_core::derive::derive_exhaust;
use airflux_core::ingest::apply_report;
use airflux_core::logger::TimeSeriesLogger;
use airflux_core::simulation::builder::SimulationBuilder;
use airflux_core::simulation::state::{LinkStatus, SamplePair};
use airflux_schemas::file_formats::MonitorSettings;
use anyhow::Result;

use crate::poller::SensorEndpoint;
use crate::render::Renderer;

/// The bridge poll cadence is fixed, independent of the configurable
/// refresh cadence.
const POLL_PERIOD: Duration = Duration::from_secs(3);

/// Run-scoped flags from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Never poll the bridge; synthetic data only.
    pub simulate: bool,
    /// Stop after this many refresh ticks (chart workflow).
    pub ticks: Option<u64>,
    /// Fixed seed for the synthetic walk.
    pub seed: Option<u64>,
}

pub async fn run<R: Renderer>(
    settings: &MonitorSettings,
    opts: RunOptions,
    mut renderer: R,
) -> Result<()> {
    let mut builder = SimulationBuilder::new();
    if let Some(seed) = opts.seed {
        builder = builder.with_seed(seed);
    }
    let mut engine = builder.build();

    let mut logger = match &settings.log_path {
        Some(path) => Some(TimeSeriesLogger::new(path)?),
        None => None,
    };

    let endpoint = SensorEndpoint::new(settings.endpoint_url.clone());
    let mut pair = SamplePair::initial();

    let mut refresh = tokio::time::interval(Duration::from_secs(settings.refresh_secs));
    let mut poll = tokio::time::interval(POLL_PERIOD);
    let mut refreshes_left = opts.ticks;

    loop {
        tokio::select! {
            _ = refresh.tick() => {
                pair = engine.advance(&pair);
                record(&mut logger, &mut renderer, &pair)?;

                if let Some(left) = refreshes_left.as_mut() {
                    *left = left.saturating_sub(1);
                    if *left == 0 {
                        break;
                    }
                }
            }
            _ = poll.tick(), if !opts.simulate => {
                match endpoint.fetch().await {
                    Ok(report) => {
                        if report.connected == Some(false) {
                            tracing::debug!(
                                "Bridge reachable but its device-side serial link is down"
                            );
                        }
                        let intake = apply_report(&pair.intake, &report);
                        let exhaust = derive_exhaust(&intake);
                        pair = SamplePair {
                            tick: pair.tick + 1,
                            link: LinkStatus::Connected,
                            intake,
                            exhaust,
                        };
                        record(&mut logger, &mut renderer, &pair)?;
                    }
                    Err(e) => {
                        // Last-known pair stays on screen; only the
                        // connectivity flag flips.
                        tracing::warn!(error = %e, "Sensor bridge fetch failed");
                        pair.link = LinkStatus::Simulated;
                    }
                }
            }
        }
    }

    tracing::info!(ticks = pair.tick, "Monitor session complete");
    render_charts_if_configured(settings)
}

fn record<R: Renderer>(
    logger: &mut Option<TimeSeriesLogger>,
    renderer: &mut R,
    pair: &SamplePair,
) -> Result<()> {
    if let Some(logger) = logger {
        logger.log_pair(pair)?;
    }
    renderer.render(pair)
}

fn render_charts_if_configured(settings: &MonitorSettings) -> Result<()> {
    match (&settings.log_path, &settings.plot_dir) {
        (Some(log_path), Some(plot_dir)) => crate::plotting::generate_all_plots(plot_dir, log_path),
        (None, Some(_)) => {
            tracing::warn!("Chart generation skipped: plot_dir is set but log_path is not");
            Ok(())
        }
        _ => Ok(()),
    }
}
