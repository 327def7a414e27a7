//! Merging a bridge report onto the previous in-memory intake sample.
//!
//! Presence is decided per field: a field the report carries (including
//! an exact zero) replaces the previous value, a field it omits keeps
//! the previous value. The report's own `aqi`/`aqi_level` are never
//! copied in; classification always reruns on the merged `pm2_5` so the
//! index and band cannot drift apart.

use crate::classify::classify_pm25;
use crate::derive::adc_voltage;
use airflux_schemas::report::SensorReport;
use airflux_schemas::sample::SensorSample;

/// Builds the next intake sample from the previous one and a report.
///
/// Pure function of its two inputs. If a raw ADC count is present but
/// its voltage is omitted, the voltage is recomputed from the merged
/// count rather than left stale.
pub fn apply_report(prev: &SensorSample, report: &SensorReport) -> SensorSample {
    let h2s_raw = report.h2s_raw.unwrap_or(prev.h2s_raw);
    let odor_raw = report.odor_raw.unwrap_or(prev.odor_raw);
    let pm2_5 = report.pm2_5.unwrap_or(prev.pm2_5);
    let (aqi, aqi_level) = classify_pm25(pm2_5);

    SensorSample {
        iaq: report.iaq.unwrap_or(prev.iaq),
        static_iaq: report.static_iaq.unwrap_or(prev.static_iaq),
        eco2: report.eco2.unwrap_or(prev.eco2),
        bvoc: report.bvoc.unwrap_or(prev.bvoc),
        gas_resistance: report.gas_resistance.unwrap_or(prev.gas_resistance),
        temperature: report.temperature.unwrap_or(prev.temperature),
        humidity: report.humidity.unwrap_or(prev.humidity),
        pressure: report.pressure.unwrap_or(prev.pressure),
        h2s_raw,
        h2s_voltage: report.h2s_voltage.unwrap_or_else(|| adc_voltage(h2s_raw)),
        odor_raw,
        odor_voltage: report.odor_voltage.unwrap_or_else(|| adc_voltage(odor_raw)),
        pm1_0: report.pm1_0.unwrap_or(prev.pm1_0),
        pm2_5,
        pm10: report.pm10.unwrap_or(prev.pm10),
        aqi,
        aqi_level,
        stabilization: report.stabilization.unwrap_or(prev.stabilization),
        run_in: report.run_in.unwrap_or(prev.run_in),
        comp_temp: report.comp_temp.unwrap_or(prev.comp_temp),
        comp_hum: report.comp_hum.unwrap_or(prev.comp_hum),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airflux_schemas::levels::AqiLevel;

    #[test]
    fn absent_fields_keep_previous_values() {
        let prev = SensorSample::initial_intake();
        let report = SensorReport::default();
        let merged = apply_report(&prev, &report);

        assert_eq!(merged.iaq, prev.iaq);
        assert_eq!(merged.temperature, prev.temperature);
        assert_eq!(merged.h2s_raw, prev.h2s_raw);
        assert_eq!(merged.pm2_5, prev.pm2_5);
    }

    #[test]
    fn a_zero_reading_is_applied_not_dropped() {
        let prev = SensorSample::initial_intake();
        let report = SensorReport {
            pm2_5: Some(0.0),
            bvoc: Some(0.0),
            h2s_raw: Some(0),
            ..Default::default()
        };
        let merged = apply_report(&prev, &report);

        assert_eq!(merged.pm2_5, 0.0);
        assert_eq!(merged.bvoc, 0.0);
        assert_eq!(merged.h2s_raw, 0);
        assert_eq!(merged.aqi, 0.0);
        assert_eq!(merged.aqi_level, AqiLevel::Good);
    }

    #[test]
    fn classification_reruns_on_the_merged_pm25() {
        let prev = SensorSample::initial_intake();
        let report = SensorReport {
            pm2_5: Some(60.0),
            // A device-side index that disagrees with its own pm2_5.
            aqi: Some(12.0),
            aqi_level: Some("Good".to_string()),
            ..Default::default()
        };
        let merged = apply_report(&prev, &report);

        let (expected_aqi, expected_level) = classify_pm25(60.0);
        assert_eq!(merged.aqi, expected_aqi);
        assert_eq!(merged.aqi_level, expected_level);
        assert_eq!(expected_level, AqiLevel::Unhealthy);
    }

    #[test]
    fn omitted_voltage_is_recomputed_from_a_present_count() {
        let prev = SensorSample::initial_intake();
        let report = SensorReport {
            h2s_raw: Some(2047),
            ..Default::default()
        };
        let merged = apply_report(&prev, &report);
        assert_eq!(merged.h2s_voltage, adc_voltage(2047));
    }

    #[test]
    fn merge_is_pure() {
        let prev = SensorSample::initial_intake();
        let report = SensorReport {
            temperature: Some(22.1),
            pm2_5: Some(14.0),
            ..Default::default()
        };
        assert_eq!(apply_report(&prev, &report), apply_report(&prev, &report));
    }
}
