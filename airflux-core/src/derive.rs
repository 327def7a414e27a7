//! Exhaust-stream derivation. The exhaust sample is never measured
//! independently: it is the intake sample scaled by the fixed
//! attenuation the filter stage is rated for, with its own AQI
//! classification recomputed on the scaled PM2.5.

use crate::classify::classify_pm25;
use airflux_schemas::sample::SensorSample;

/// 12-bit ADC count to volts at the 3.3 V reference, rounded to three
/// decimal places (the resolution the dashboard displays).
pub fn adc_voltage(raw: u16) -> f64 {
    let volts = f64::from(raw) * 3.3 / 4095.0;
    (volts * 1000.0).round() / 1000.0
}

/// Builds the exhaust sample from an intake sample.
///
/// Pure function of its input. Pressure and the calibration fields pass
/// through unchanged; everything else is scaled or offset, and
/// `aqi`/`aqi_level` are reclassified from the derived `pm2_5` rather
/// than copied.
pub fn derive_exhaust(intake: &SensorSample) -> SensorSample {
    let h2s_raw = (f64::from(intake.h2s_raw) * 0.3).floor() as u16;
    let odor_raw = (f64::from(intake.odor_raw) * 0.25).floor() as u16;
    let pm2_5 = intake.pm2_5 * 0.3;
    let (aqi, aqi_level) = classify_pm25(pm2_5);

    SensorSample {
        iaq: intake.iaq * 0.5,
        static_iaq: intake.static_iaq * 0.5,
        eco2: intake.eco2 * 0.8,
        bvoc: intake.bvoc * 0.4,
        gas_resistance: intake.gas_resistance * 2.0,
        temperature: intake.temperature - 1.0,
        humidity: intake.humidity - 3.0,
        pressure: intake.pressure,
        h2s_raw,
        h2s_voltage: adc_voltage(h2s_raw),
        odor_raw,
        odor_voltage: adc_voltage(odor_raw),
        pm1_0: intake.pm1_0 * 0.3,
        pm2_5,
        pm10: intake.pm10 * 0.3,
        aqi,
        aqi_level,
        stabilization: intake.stabilization,
        run_in: intake.run_in,
        comp_temp: intake.comp_temp,
        comp_hum: intake.comp_hum,
    }
}
