use crate::levels::AqiLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two sampled air streams a reading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamRole {
    Intake,
    Exhaust,
}

impl fmt::Display for StreamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamRole::Intake => f.write_str("Intake"),
            StreamRole::Exhaust => f.write_str("Exhaust"),
        }
    }
}

/// One reading snapshot for a single air stream.
///
/// A fresh sample is built on every update tick; samples are never
/// patched field-by-field after construction. `aqi`/`aqi_level` are
/// always recomputed from `pm2_5` by the classifier before a sample
/// becomes visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    /// Vendor IAQ score, 0-500.
    pub iaq: f64,
    /// Offset-compensated IAQ variant reported by the sensor stack.
    pub static_iaq: f64,
    /// Equivalent CO2 estimate, ppm.
    pub eco2: f64,
    /// Breath-VOC estimate, ppm.
    pub bvoc: f64,
    /// MOX sensor gas resistance, Ohm.
    pub gas_resistance: f64,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Percent relative humidity.
    pub humidity: f64,
    /// Barometric pressure, hPa.
    pub pressure: f64,
    /// H2S channel, 12-bit ADC count (0-4095).
    pub h2s_raw: u16,
    /// H2S channel converted to volts, 3 decimal places.
    pub h2s_voltage: f64,
    /// Odor channel, 12-bit ADC count (0-4095).
    pub odor_raw: u16,
    /// Odor channel converted to volts, 3 decimal places.
    pub odor_voltage: f64,
    /// PM1.0 concentration, ug/m3.
    pub pm1_0: f64,
    /// PM2.5 concentration, ug/m3.
    pub pm2_5: f64,
    /// PM10 concentration, ug/m3.
    pub pm10: f64,
    /// EPA-style index derived from `pm2_5`, 0-500 (capped at 300).
    pub aqi: f64,
    /// Health band matching `aqi`.
    pub aqi_level: AqiLevel,
    /// Sensor stabilization progress, 0-100 %.
    pub stabilization: f64,
    /// Sensor run-in progress, 0-100 %.
    pub run_in: f64,
    /// Heat-compensated temperature, degrees Celsius.
    pub comp_temp: f64,
    /// Heat-compensated humidity, %RH.
    pub comp_hum: f64,
}

impl SensorSample {
    /// Seed values shown on the intake pane before the first real update.
    pub fn initial_intake() -> Self {
        Self {
            iaq: 50.0,
            static_iaq: 50.0,
            eco2: 400.0,
            bvoc: 0.5,
            gas_resistance: 50_000.0,
            temperature: 24.5,
            humidity: 45.0,
            pressure: 1013.25,
            h2s_raw: 0,
            h2s_voltage: 0.0,
            odor_raw: 0,
            odor_voltage: 0.0,
            pm1_0: 10.0,
            pm2_5: 25.0,
            pm10: 40.0,
            aqi: 60.0,
            aqi_level: AqiLevel::Moderate,
            stabilization: 50.0,
            run_in: 75.0,
            comp_temp: 25.2,
            comp_hum: 46.5,
        }
    }

    /// Seed values shown on the exhaust pane before the first real update.
    pub fn initial_exhaust() -> Self {
        Self {
            iaq: 30.0,
            static_iaq: 30.0,
            eco2: 380.0,
            bvoc: 0.2,
            gas_resistance: 80_000.0,
            temperature: 26.0,
            humidity: 42.0,
            pressure: 1013.25,
            h2s_raw: 500,
            h2s_voltage: 0.4,
            odor_raw: 400,
            odor_voltage: 0.3,
            pm1_0: 3.0,
            pm2_5: 8.0,
            pm10: 12.0,
            aqi: 30.0,
            aqi_level: AqiLevel::Good,
            stabilization: 90.0,
            run_in: 95.0,
            comp_temp: 26.5,
            comp_hum: 43.0,
        }
    }
}
