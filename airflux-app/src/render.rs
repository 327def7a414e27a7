//! Terminal presentation of the live pair.

use std::io::{self, Write};

use airflux_core::classify::classify_iaq;
use airflux_core::simulation::state::SamplePair;
use airflux_schemas::sample::{SensorSample, StreamRole};
use anyhow::Result;
use chrono::Local;

/// Presentation seam. The monitor hands every fresh pair to exactly one
/// renderer; everything downstream of this trait is display concern and
/// never feeds back into the data model.
pub trait Renderer {
    fn render(&mut self, pair: &SamplePair) -> Result<()>;
}

/// Fixed-width terminal table, one block per update tick.
pub struct ConsoleRenderer<W: Write> {
    out: W,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_stream(&mut self, role: StreamRole, sample: &SensorSample) -> io::Result<()> {
        writeln!(self.out, "[{role}]")?;
        writeln!(
            self.out,
            "  IAQ: {:>4.0} ({})  |  AQI: {:>4.0} ({})",
            sample.iaq.round(),
            classify_iaq(sample.iaq),
            sample.aqi.round(),
            sample.aqi_level,
        )?;
        writeln!(
            self.out,
            "  Temp: {:>5.1} C  Humidity: {:>5.1} %  Pressure: {:>7.1} hPa",
            sample.temperature, sample.humidity, sample.pressure,
        )?;
        writeln!(
            self.out,
            "  eCO2: {:>5.0} ppm  bVOC: {:>5.2} ppm  Gas: {:>7.0} Ohm",
            sample.eco2.round(),
            sample.bvoc,
            sample.gas_resistance.round(),
        )?;
        writeln!(
            self.out,
            "  H2S: {:>4} ({:.3} V)  Odor: {:>4} ({:.3} V)",
            sample.h2s_raw, sample.h2s_voltage, sample.odor_raw, sample.odor_voltage,
        )?;
        writeln!(
            self.out,
            "  PM1.0: {:>3.0}  PM2.5: {:>3.0}  PM10: {:>3.0} ug/m3",
            sample.pm1_0.round(),
            sample.pm2_5.round(),
            sample.pm10.round(),
        )?;
        writeln!(
            self.out,
            "  Stabilization: {:>3.0} %  Run-in: {:>3.0} %",
            sample.stabilization.round(),
            sample.run_in.round(),
        )?;
        Ok(())
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, pair: &SamplePair) -> Result<()> {
        let stamp = Local::now().format("%H:%M:%S");
        writeln!(
            self.out,
            "=== tick {:>6} | {} | {} ===",
            pair.tick,
            stamp,
            pair.link.describe(),
        )?;
        self.write_stream(StreamRole::Intake, &pair.intake)?;
        self.write_stream(StreamRole::Exhaust, &pair.exhaust)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
