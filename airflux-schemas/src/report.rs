use serde::Deserialize;

/// One JSON body from the sensor bridge endpoint.
///
/// Every field is optional: the bridge forwards whatever the device last
/// emitted, and a partially-warmed sensor stack omits channels it has no
/// reading for yet. An absent field and a genuine `0` reading are
/// distinct here; the merge in `airflux-core` only falls back to the
/// previous in-memory value when a field is truly missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SensorReport {
    pub iaq: Option<f64>,
    pub static_iaq: Option<f64>,
    pub eco2: Option<f64>,
    pub bvoc: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub gas_resistance: Option<f64>,
    pub h2s_raw: Option<u16>,
    pub h2s_voltage: Option<f64>,
    pub odor_raw: Option<u16>,
    pub odor_voltage: Option<f64>,
    pub stabilization: Option<f64>,
    pub run_in: Option<f64>,
    pub comp_temp: Option<f64>,
    pub comp_hum: Option<f64>,
    pub pm1_0: Option<f64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    /// Index as computed on the device. Parsed for diagnostics only; the
    /// monitor always reclassifies locally from `pm2_5`.
    pub aqi: Option<f64>,
    pub aqi_level: Option<String>,
    /// The bridge's own serial-side link state. The bridge answering at
    /// all only proves the bridge process is up, not the device.
    pub connected: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_deserialize_to_none() {
        let report: SensorReport = serde_json::from_str(r#"{"iaq": 75.5}"#).unwrap();
        assert_eq!(report.iaq, Some(75.5));
        assert_eq!(report.temperature, None);
        assert_eq!(report.pm2_5, None);
        assert_eq!(report.connected, None);
    }

    #[test]
    fn zero_is_a_present_reading_not_a_gap() {
        let report: SensorReport =
            serde_json::from_str(r#"{"pm2_5": 0, "h2s_raw": 0, "bvoc": 0.0}"#).unwrap();
        assert_eq!(report.pm2_5, Some(0.0));
        assert_eq!(report.h2s_raw, Some(0));
        assert_eq!(report.bvoc, Some(0.0));
    }

    #[test]
    fn full_bridge_payload_parses() {
        let body = r#"{
            "iaq": 52.3, "static_iaq": 51.0, "eco2": 412.0, "bvoc": 0.48,
            "temperature": 24.8, "humidity": 44.2, "pressure": 1012.9,
            "gas_resistance": 51234.0, "h2s_raw": 811, "h2s_voltage": 0.653,
            "odor_raw": 402, "odor_voltage": 0.324, "stabilization": 100.0,
            "run_in": 100.0, "comp_temp": 25.4, "comp_hum": 45.1,
            "pm1_0": 9.0, "pm2_5": 21.5, "pm10": 33.0,
            "aqi": 71.0, "aqi_level": "Moderate", "connected": true
        }"#;
        let report: SensorReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.h2s_raw, Some(811));
        assert_eq!(report.aqi_level.as_deref(), Some("Moderate"));
        assert_eq!(report.connected, Some(true));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let report: SensorReport =
            serde_json::from_str(r#"{"iaq": 10.0, "firmware": "1.4.2"}"#).unwrap();
        assert_eq!(report.iaq, Some(10.0));
    }
}
