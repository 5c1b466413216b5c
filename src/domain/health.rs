//! Health - Channel Severity Classification

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a single health channel, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Ok,
    Warn,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Ok => write!(f, "OK"),
            Severity::Warn => write!(f, "WARN"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Health status across the four monitored channels.
///
/// Recomputed fresh on every evaluation; no hysteresis, no alarm latching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Generator winding temperature channel
    pub generator_temp: Severity,
    /// Gearbox oil temperature channel
    pub gearbox_temp: Severity,
    /// Drivetrain vibration channel
    pub vibration: Severity,
    /// Aerodynamic performance channel
    pub performance: Severity,
}

impl HealthStatus {
    /// All channels nominal
    pub fn all_ok() -> Self {
        Self {
            generator_temp: Severity::Ok,
            gearbox_temp: Severity::Ok,
            vibration: Severity::Ok,
            performance: Severity::Ok,
        }
    }

    /// Worst severity across all channels
    pub fn worst(&self) -> Severity {
        self.generator_temp
            .max(self.gearbox_temp)
            .max(self.vibration)
            .max(self.performance)
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::all_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Ok < Severity::Warn);
        assert!(Severity::Warn < Severity::Critical);
    }

    #[test]
    fn test_worst_picks_highest_channel() {
        let health = HealthStatus {
            vibration: Severity::Warn,
            gearbox_temp: Severity::Critical,
            ..HealthStatus::all_ok()
        };
        assert_eq!(health.worst(), Severity::Critical);
    }

    #[test]
    fn test_severity_serializes_uppercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
        let back: Severity = serde_json::from_str("\"WARN\"").unwrap();
        assert_eq!(back, Severity::Warn);
    }
}
