//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DEVICE_ID, DEFAULT_REFRESH_INTERVAL_MS, HISTORY_CAPACITY};
use crate::domain::params::TurbineParams;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Turbine parameter set
    pub turbine: TurbineParams,
    /// Driver loop configuration
    pub run: RunConfig,
}

/// Driver loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Device ID used to tag log lines (e.g., "WTG-001")
    pub device_id: String,
    /// Refresh interval between simulation steps (ms)
    pub interval_ms: u64,
    /// In-memory history capacity (records)
    pub history_capacity: usize,
    /// Stop after this many steps; run until interrupted when absent
    pub max_steps: Option<u64>,
    /// Write the accumulated history to this path as JSON on shutdown
    pub export_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            device_id: DEFAULT_DEVICE_ID.to_string(),
            interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            history_capacity: HISTORY_CAPACITY,
            max_steps: None,
            export_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.run.interval_ms, DEFAULT_REFRESH_INTERVAL_MS);
        assert_eq!(config.run.history_capacity, HISTORY_CAPACITY);
        assert!(config.turbine.validate().is_ok());
    }

    #[test]
    fn test_section_override() {
        let config: AppConfig = toml::from_str(
            "[run]\ndevice_id = \"WTG-007\"\nmax_steps = 500\n\n[turbine]\nrated_power = 3.0e6\n",
        )
        .unwrap();
        assert_eq!(config.run.device_id, "WTG-007");
        assert_eq!(config.run.max_steps, Some(500));
        assert_eq!(config.turbine.rated_power, 3_000_000.0);
    }
}
