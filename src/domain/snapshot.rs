//! Snapshot - Simulated SCADA Sensor State

use serde::{Deserialize, Serialize};

/// One instant of simulated SCADA sensor state.
///
/// Produced by the simulator and immutable afterwards; every bounded field
/// is clamped at the point of production, so consumers never re-validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScadaSnapshot {
    /// Wind speed (m/s)
    pub wind_speed: f64,
    /// Rotor speed (RPM)
    pub rpm: f64,
    /// Blade pitch angle (degrees)
    pub pitch: f64,
    /// Electrical power output (W)
    pub power: f64,
    /// Generator winding temperature (°C)
    pub gen_temp: f64,
    /// Gearbox oil temperature (°C)
    pub gb_temp: f64,
    /// Drivetrain vibration (mm/s RMS)
    pub vibration: f64,
}

impl ScadaSnapshot {
    /// Canonical startup state: moderate wind, rotor turning, drivetrain cold.
    pub fn initial() -> Self {
        Self {
            wind_speed: 8.0,
            rpm: 8.0,
            pitch: 2.0,
            power: 0.0,
            gen_temp: 40.0,
            gb_temp: 45.0,
            vibration: 2.5,
        }
    }
}
