use super::state::{LinkStatus, SamplePair};
use crate::classify::classify_pm25;
use crate::derive::{adc_voltage, derive_exhaust};
use airflux_schemas::sample::SensorSample;
use rand::rngs::StdRng;
use rand::Rng;

// Full span of the uniform per-tick perturbation, centered on zero, and
// the physical clamp range for each walked channel.
const TEMPERATURE_SPAN: f64 = 0.3;
const TEMPERATURE_RANGE: (f64, f64) = (20.0, 30.0);
const HUMIDITY_SPAN: f64 = 2.0;
const HUMIDITY_RANGE: (f64, f64) = (30.0, 70.0);
const IAQ_SPAN: f64 = 5.0;
const IAQ_RANGE: (f64, f64) = (0.0, 500.0);
const ECO2_SPAN: f64 = 20.0;
const ECO2_RANGE: (f64, f64) = (400.0, 5000.0);
const BVOC_SPAN: f64 = 0.05;
const BVOC_RANGE: (f64, f64) = (0.0, 5.0);
const GAS_RESISTANCE_SPAN: f64 = 5000.0;
const GAS_RESISTANCE_RANGE: (f64, f64) = (1000.0, 100_000.0);
const PM1_0_SPAN: f64 = 3.0;
const PM2_5_SPAN: f64 = 4.0;
const PM10_SPAN: f64 = 5.0;
const PM_RANGE: (f64, f64) = (0.0, 500.0);

/// The electrochemical channels jump freely instead of walking: each
/// tick redraws the raw count uniformly on [0, ADC_REDRAW_MAX).
const ADC_REDRAW_MAX: u16 = 2048;

/// Synthetic data source driving the display whenever the bridge is
/// unreachable. Stateful by construction: each tick perturbs the
/// previous tick's intake sample with a bounded random walk.
pub struct SimulationEngine {
    pub(super) rng: StdRng,
}

impl SimulationEngine {
    fn walk(&mut self, value: f64, span: f64, range: (f64, f64)) -> f64 {
        (value + (self.rng.random::<f64>() - 0.5) * span).clamp(range.0, range.1)
    }

    /// Produces the next intake sample from the previous one.
    ///
    /// Channels without a declared walk (static IAQ, pressure, the
    /// calibration fields) carry over unchanged. AQI is reclassified on
    /// the perturbed PM2.5 before the sample is returned.
    pub fn next_intake(&mut self, prev: &SensorSample) -> SensorSample {
        let h2s_raw = self.rng.random_range(0..ADC_REDRAW_MAX);
        let odor_raw = self.rng.random_range(0..ADC_REDRAW_MAX);
        let pm2_5 = self.walk(prev.pm2_5, PM2_5_SPAN, PM_RANGE);
        let (aqi, aqi_level) = classify_pm25(pm2_5);

        SensorSample {
            iaq: self.walk(prev.iaq, IAQ_SPAN, IAQ_RANGE),
            static_iaq: prev.static_iaq,
            eco2: self.walk(prev.eco2, ECO2_SPAN, ECO2_RANGE),
            bvoc: self.walk(prev.bvoc, BVOC_SPAN, BVOC_RANGE),
            gas_resistance: self.walk(prev.gas_resistance, GAS_RESISTANCE_SPAN, GAS_RESISTANCE_RANGE),
            temperature: self.walk(prev.temperature, TEMPERATURE_SPAN, TEMPERATURE_RANGE),
            humidity: self.walk(prev.humidity, HUMIDITY_SPAN, HUMIDITY_RANGE),
            pressure: prev.pressure,
            h2s_raw,
            h2s_voltage: adc_voltage(h2s_raw),
            odor_raw,
            odor_voltage: adc_voltage(odor_raw),
            pm1_0: self.walk(prev.pm1_0, PM1_0_SPAN, PM_RANGE),
            pm2_5,
            pm10: self.walk(prev.pm10, PM10_SPAN, PM_RANGE),
            aqi,
            aqi_level,
            stabilization: prev.stabilization,
            run_in: prev.run_in,
            comp_temp: prev.comp_temp,
            comp_hum: prev.comp_hum,
        }
    }

    /// One synthetic display tick: walks the intake, derives the exhaust
    /// from it, and stamps the pair as simulated.
    pub fn advance(&mut self, pair: &SamplePair) -> SamplePair {
        let intake = self.next_intake(&pair.intake);
        let exhaust = derive_exhaust(&intake);
        SamplePair {
            tick: pair.tick + 1,
            link: LinkStatus::Simulated,
            intake,
            exhaust,
        }
    }
}
