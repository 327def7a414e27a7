//! This module is responsible for generating all visualizations from the
//! monitor's CSV time-series log.

use airflux_core::logger::LogRow;
use airflux_schemas::sample::SensorSample;
use anyhow::Result;
use plotters::prelude::*;
use std::fs;
use std::path::Path;

/// A flattened structure holding one parsed log record for easy plotting.
#[derive(Clone, Debug)]
struct PlottingData {
    tick: u64,
    intake: SensorSample,
    exhaust: SensorSample,
}

/// The main function to generate and save all charts for a monitor session.
pub fn generate_all_plots(plot_dir: &str, log_path: &str) -> Result<()> {
    tracing::info!(log_path, "Generating charts from monitor log");

    let data = parse_log_file(log_path)?;
    if data.is_empty() {
        tracing::warn!("No data to plot");
        return Ok(());
    }

    let run_dir = format!(
        "{}/run_{}",
        plot_dir,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    fs::create_dir_all(&run_dir)?;

    plot_air_quality_indices(&run_dir, &data)?;
    plot_particulates(&run_dir, &data)?;
    plot_environment(&run_dir, &data)?;

    tracing::info!(dir = %run_dir, "Charts saved");
    Ok(())
}

/// Parses the monitor log CSV file back into `PlottingData` records.
fn parse_log_file(log_path: &str) -> Result<Vec<PlottingData>> {
    let mut reader = csv::Reader::from_path(log_path)?;
    let mut data = Vec::new();

    for result in reader.deserialize() {
        let record: LogRow = result?;
        data.push(PlottingData {
            tick: record.tick,
            intake: serde_json::from_str(&record.intake_json)?,
            exhaust: serde_json::from_str(&record.exhaust_json)?,
        });
    }

    Ok(data)
}

/// IAQ score and AQI over time for both streams, on the shared 0-500 scale.
fn plot_air_quality_indices(run_dir: &str, data: &[PlottingData]) -> Result<()> {
    let path = Path::new(run_dir).join("1_air_quality_indices.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tick = data.last().map_or(1, |d| d.tick);

    let mut chart = ChartBuilder::on(&root)
        .caption("Air Quality Indices Over Time", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..max_tick, 0f64..500f64)?;

    chart
        .configure_mesh()
        .x_desc("Tick")
        .y_desc("Index (0-500)")
        .draw()?;

    let series: [(&str, RGBColor, fn(&PlottingData) -> f64); 4] = [
        ("Intake IAQ", RED, |d| d.intake.iaq),
        ("Exhaust IAQ", BLUE, |d| d.exhaust.iaq),
        ("Intake AQI", MAGENTA, |d| d.intake.aqi),
        ("Exhaust AQI", GREEN, |d| d.exhaust.aqi),
    ];

    for (name, color, value) in series {
        chart
            .draw_series(LineSeries::new(
                data.iter().map(|d| (d.tick, value(d))),
                color.stroke_width(2),
            ))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// The three particulate channels over time, intake against exhaust.
fn plot_particulates(run_dir: &str, data: &[PlottingData]) -> Result<()> {
    let path = Path::new(run_dir).join("2_particulates.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tick = data.last().map_or(1, |d| d.tick);
    let max_pm: f64 = data
        .iter()
        .flat_map(|d| [d.intake.pm1_0, d.intake.pm2_5, d.intake.pm10])
        .fold(10.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Particulate Channels Over Time", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..max_tick, 0f64..max_pm * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Tick")
        .y_desc("Concentration (ug/m3)")
        .draw()?;

    let series: [(&str, RGBColor, fn(&PlottingData) -> f64); 6] = [
        ("Intake PM1.0", RED, |d| d.intake.pm1_0),
        ("Intake PM2.5", MAGENTA, |d| d.intake.pm2_5),
        ("Intake PM10", BLACK, |d| d.intake.pm10),
        ("Exhaust PM1.0", GREEN, |d| d.exhaust.pm1_0),
        ("Exhaust PM2.5", BLUE, |d| d.exhaust.pm2_5),
        ("Exhaust PM10", CYAN, |d| d.exhaust.pm10),
    ];

    for (name, color, value) in series {
        chart
            .draw_series(LineSeries::new(
                data.iter().map(|d| (d.tick, value(d))),
                color.stroke_width(2),
            ))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Temperature and humidity for both streams.
fn plot_environment(run_dir: &str, data: &[PlottingData]) -> Result<()> {
    let path = Path::new(run_dir).join("3_environment.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tick = data.last().map_or(1, |d| d.tick);

    let mut chart = ChartBuilder::on(&root)
        .caption("Environment Over Time", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..max_tick, 0f64..100f64)?;

    chart
        .configure_mesh()
        .x_desc("Tick")
        .y_desc("Value")
        .draw()?;

    let series: [(&str, RGBColor, fn(&PlottingData) -> f64); 4] = [
        ("Intake Temp (C)", RED, |d| d.intake.temperature),
        ("Exhaust Temp (C)", MAGENTA, |d| d.exhaust.temperature),
        ("Intake Humidity (%)", BLUE, |d| d.intake.humidity),
        ("Exhaust Humidity (%)", CYAN, |d| d.exhaust.humidity),
    ];

    for (name, color, value) in series {
        chart
            .draw_series(LineSeries::new(
                data.iter().map(|d| (d.tick, value(d))),
                color.stroke_width(3),
            ))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
