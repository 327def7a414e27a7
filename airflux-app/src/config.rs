use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use airflux_core::error::AirfluxError;
use airflux_schemas::file_formats::{MonitorConfigFile, MonitorSettings};

/// Loads the monitor settings from a YAML file.
///
/// A missing file is not an error: the monitor runs fine on built-in
/// defaults against the standard bridge endpoint.
pub fn load_settings(path: &str) -> Result<MonitorSettings> {
    if !Path::new(path).exists() {
        tracing::warn!(path, "Config file not found, using built-in defaults");
        return Ok(MonitorSettings::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path))?;
    let file: MonitorConfigFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML from '{}'", path))?;

    validate(&file.monitor)?;
    Ok(file.monitor)
}

fn validate(settings: &MonitorSettings) -> Result<()> {
    if settings.endpoint_url.is_empty() {
        return Err(AirfluxError::Config("endpoint_url must not be empty".to_string()).into());
    }
    if settings.refresh_secs == 0 {
        return Err(AirfluxError::Config("refresh_secs must be at least 1".to_string()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let yaml = r#"
schema_version: "1.0"
monitor:
  endpoint_url: "http://10.0.0.5:8888/api/sensors"
  refresh_secs: 5
  log_path: "./data/airflux_log.csv"
  plot_dir: "./data/plots"
"#;
        let file: MonitorConfigFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.schema_version, "1.0");
        assert_eq!(file.monitor.endpoint_url, "http://10.0.0.5:8888/api/sensors");
        assert_eq!(file.monitor.refresh_secs, 5);
        assert_eq!(
            file.monitor.log_path.as_deref(),
            Some("./data/airflux_log.csv")
        );
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let yaml = r#"
schema_version: "1.0"
monitor:
  refresh_secs: 10
"#;
        let file: MonitorConfigFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.monitor.refresh_secs, 10);
        assert_eq!(file.monitor.endpoint_url, "http://localhost:8888/api/sensors");
        assert_eq!(file.monitor.log_path, None);
        assert_eq!(file.monitor.plot_dir, None);
    }

    #[test]
    fn zero_refresh_cadence_is_rejected() {
        let settings = MonitorSettings {
            refresh_secs: 0,
            ..MonitorSettings::default()
        };
        assert!(validate(&settings).is_err());
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let settings = MonitorSettings {
            endpoint_url: String::new(),
            ..MonitorSettings::default()
        };
        assert!(validate(&settings).is_err());
    }
}
