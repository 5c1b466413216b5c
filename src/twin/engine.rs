//! Twin Engine
//!
//! Pure functions over one SCADA snapshot: physics derivation and
//! per-channel health classification. Neither retains state between calls,
//! so both are safe to invoke from any call site.

use std::f64::consts::PI;

use crate::domain::health::{HealthStatus, Severity};
use crate::domain::params::TurbineParams;
use crate::domain::physics::DerivedPhysics;
use crate::domain::snapshot::ScadaSnapshot;

/// Power coefficient below which output counts as degraded
const CP_DEGRADED: f64 = 0.25;

/// Wind and angular speeds below this are treated as standstill when
/// dividing, to keep ratios bounded near zero.
const STANDSTILL_EPSILON: f64 = 0.1;

/// Derive digital twin physics quantities from one SCADA snapshot.
///
/// Deterministic: identical snapshots always yield identical physics.
pub fn compute_physics(params: &TurbineParams, scada: &ScadaSnapshot) -> DerivedPhysics {
    let omega = 2.0 * PI * scada.rpm / 60.0;

    let p_wind = if scada.wind_speed > 0.0 {
        0.5 * params.air_density * params.swept_area() * scada.wind_speed.powi(3)
    } else {
        0.0
    };

    let tsr = if scada.wind_speed > STANDSTILL_EPSILON {
        omega * params.rotor_radius / scada.wind_speed
    } else {
        0.0
    };

    // Capped at the Betz limit: a transient power overshoot of the naive
    // available-power estimate must never report an impossible coefficient.
    let cp = if p_wind > 1.0 {
        (scada.power / p_wind).min(params.cp_max)
    } else {
        0.0
    };

    let torque = if omega > STANDSTILL_EPSILON {
        scada.power / omega
    } else {
        0.0
    };

    DerivedPhysics {
        omega,
        p_wind,
        tsr,
        cp,
        torque,
    }
}

/// Classify health from one snapshot and its derived physics.
///
/// Channels are independent and each defaults to OK. Total over all
/// real-valued inputs; classification never fails.
pub fn evaluate_health(
    params: &TurbineParams,
    scada: &ScadaSnapshot,
    physics: &DerivedPhysics,
) -> HealthStatus {
    let generator_temp = grade(scada.gen_temp, params.gen_temp_warn, params.gen_temp_crit);
    let gearbox_temp = grade(scada.gb_temp, params.gb_temp_warn, params.gb_temp_crit);
    let vibration = grade(scada.vibration, params.vib_warn, params.vib_crit);

    // Low Cp alone is not a fault: below cut-in the turbine idles
    // legitimately, so only flag degradation when there is wind to harvest.
    let performance = if physics.cp < CP_DEGRADED && scada.wind_speed > params.cut_in_wind {
        Severity::Warn
    } else {
        Severity::Ok
    };

    HealthStatus {
        generator_temp,
        gearbox_temp,
        vibration,
        performance,
    }
}

fn grade(value: f64, warn: f64, crit: f64) -> Severity {
    if value > crit {
        Severity::Critical
    } else if value > warn {
        Severity::Warn
    } else {
        Severity::Ok
    }
}
