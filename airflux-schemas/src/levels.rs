use serde::{Deserialize, Serialize};
use std::fmt;

/// EPA-style AQI health band, derived from PM2.5 only.
///
/// Serializes to the exact display strings the sensor bridge and the
/// dashboard exchange on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AqiLevel {
    Good,
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthySensitive,
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    Hazardous,
}

impl AqiLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AqiLevel::Unhealthy => "Unhealthy",
            AqiLevel::VeryUnhealthy => "Very Unhealthy",
            AqiLevel::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for AqiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status band for the vendor IAQ score.
///
/// Independent of [`AqiLevel`]: this one bands the raw IAQ score, not a
/// PM2.5-derived index. The two must never be cross-used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IaqLevel {
    Excellent,
    Good,
    #[serde(rename = "Lightly Polluted")]
    LightlyPolluted,
    #[serde(rename = "Moderately Polluted")]
    ModeratelyPolluted,
    #[serde(rename = "Heavily Polluted")]
    HeavilyPolluted,
    #[serde(rename = "Severely Polluted")]
    SeverelyPolluted,
}

impl IaqLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            IaqLevel::Excellent => "Excellent",
            IaqLevel::Good => "Good",
            IaqLevel::LightlyPolluted => "Lightly Polluted",
            IaqLevel::ModeratelyPolluted => "Moderately Polluted",
            IaqLevel::HeavilyPolluted => "Heavily Polluted",
            IaqLevel::SeverelyPolluted => "Severely Polluted",
        }
    }
}

impl fmt::Display for IaqLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
