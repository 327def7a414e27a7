use serde::Deserialize;

/// Top-level shape of the monitor's YAML config file.
#[derive(Debug, Deserialize)]
pub struct MonitorConfigFile {
    pub schema_version: String,
    pub monitor: MonitorSettings,
}

/// Runtime settings for the monitor loop. Every field has a default so a
/// partial file parses.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorSettings {
    /// Sensor bridge endpoint polled for live readings.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    /// Seconds between display refresh ticks (the synthetic cadence).
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    /// CSV time-series log destination. Disabled when absent.
    #[serde(default)]
    pub log_path: Option<String>,
    /// Directory for rendered charts. Disabled when absent.
    #[serde(default)]
    pub plot_dir: Option<String>,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            refresh_secs: default_refresh_secs(),
            log_path: None,
            plot_dir: None,
        }
    }
}

fn default_endpoint_url() -> String {
    "http://localhost:8888/api/sensors".to_string()
}

fn default_refresh_secs() -> u64 {
    3
}
