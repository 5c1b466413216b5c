//! Driver Constants
//!
//! Centralized defaults for the headless driver loop.

/// Config file consulted when no path is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "twin.toml";

/// Device ID used to tag log lines when none is configured
pub const DEFAULT_DEVICE_ID: &str = "WTG-001";

/// Refresh interval between simulation steps (one simulated second)
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1000;

/// Bounded cache capacity
pub const HISTORY_CAPACITY: usize = 1000;
