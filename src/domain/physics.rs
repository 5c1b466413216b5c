//! Physics - Derived Digital Twin Quantities

use serde::{Deserialize, Serialize};

/// Physics quantities derived from one SCADA snapshot.
///
/// Exists only as the output of a twin engine call; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedPhysics {
    /// Rotor angular speed (rad/s)
    pub omega: f64,
    /// Available wind power through the swept area (W)
    pub p_wind: f64,
    /// Tip-speed ratio
    pub tsr: f64,
    /// Power coefficient, capped at the Betz limit
    pub cp: f64,
    /// Mechanical torque (N·m)
    pub torque: f64,
}
