use airflux_schemas::sample::SensorSample;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the currently displayed pair came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// The last update was a successful bridge fetch.
    Connected,
    /// The bridge is unreachable; the synthetic walk is driving.
    Simulated,
}

impl LinkStatus {
    /// The status line shown next to the connection dot.
    pub fn describe(&self) -> &'static str {
        match self {
            LinkStatus::Connected => "Connected to sensor bridge",
            LinkStatus::Simulated => "Using simulated data",
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkStatus::Connected => f.write_str("connected"),
            LinkStatus::Simulated => f.write_str("simulated"),
        }
    }
}

/// The live intake/exhaust pair, owned by the monitor loop and replaced
/// wholesale on every update tick. No sample outlives one display cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePair {
    pub tick: u64,
    pub link: LinkStatus,
    pub intake: SensorSample,
    pub exhaust: SensorSample,
}

impl SamplePair {
    /// The pair shown before the first update tick.
    pub fn initial() -> Self {
        Self {
            tick: 0,
            link: LinkStatus::Simulated,
            intake: SensorSample::initial_intake(),
            exhaust: SensorSample::initial_exhaust(),
        }
    }
}
