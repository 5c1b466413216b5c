//! SCADA Simulator
//!
//! Generates physically believable sensor values at 1-second intervals.
//! Wind speed is the master variable, a randomized walk; every other
//! channel reacts to it through control laws and first-order lags.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::params::TurbineParams;
use crate::domain::snapshot::ScadaSnapshot;

/// Stochastic state-evolution model for a single turbine.
///
/// Holds no state between steps beyond the random generator; each call is a
/// function of the previous snapshot alone.
pub struct ScadaSimulator {
    params: TurbineParams,
    rng: StdRng,
}

impl ScadaSimulator {
    /// Simulator with an entropy-seeded generator, for live operation
    pub fn new(params: TurbineParams) -> Self {
        Self {
            params,
            rng: StdRng::from_entropy(),
        }
    }

    /// Simulator with a fixed seed, for reproducible runs
    pub fn with_seed(params: TurbineParams, seed: u64) -> Self {
        Self {
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Canonical starting snapshot
    pub fn initialize() -> ScadaSnapshot {
        ScadaSnapshot::initial()
    }

    /// Advance the turbine state by one second.
    ///
    /// Draws exactly four uniform samples per call, in a fixed order, so a
    /// seeded run reproduces bit-identically.
    pub fn step(&mut self, prev: &ScadaSnapshot) -> ScadaSnapshot {
        let p = &self.params;

        // 1. Wind speed: fast noise plus slow drift, floored at calm.
        let noise = self.rng.gen_range(-0.2..0.2);
        let drift = self.rng.gen_range(-0.02..0.02);
        let wind_speed = (prev.wind_speed + noise + drift).max(0.0);

        // 2. Rotor speed: tracks wind below rated, held at max above; the
        // controller never lets the rotor fall below its minimum speed.
        let rpm = if wind_speed < p.rated_wind {
            (1.5 * wind_speed).min(p.max_rpm)
        } else {
            p.max_rpm
        };
        let rpm = rpm.max(p.min_rpm);

        // 3. Pitch: fine pitch for maximum capture below rated wind;
        // above it, an incremental ramp models the actuator limiting power.
        let pitch = if wind_speed <= p.rated_wind {
            p.min_pitch + self.rng.gen_range(0.0..0.3)
        } else {
            (prev.pitch + self.rng.gen_range(0.1..0.3)).min(p.max_pitch)
        };

        // 4. Power: cubic in wind above cut-in, capped at rated. The 0.4
        // conversion factor is fixed here and distinct from the Cp the twin
        // engine reports.
        let power = if wind_speed < p.cut_in_wind {
            0.0
        } else {
            let p_wind = 0.5 * p.air_density * p.swept_area() * wind_speed.powi(3);
            (p.efficiency * 0.4 * p_wind).min(p.rated_power)
        };

        // 5. Generator temperature: first-order relaxation toward a
        // load-proportional equilibrium, time constant ~100 s.
        let gen_temp = prev.gen_temp + 0.01 * (power / p.rated_power * 80.0 - prev.gen_temp);

        // 6. Gearbox temperature: same lag, driven by combined electrical
        // and rotational load.
        let gb_load = power / p.rated_power + rpm / p.max_rpm;
        let gb_temp = prev.gb_temp + 0.008 * (gb_load * 90.0 - prev.gb_temp);

        // 7. Vibration: random walk above the sensor noise floor, not
        // coupled to load in this model.
        let vibration = (prev.vibration + self.rng.gen_range(-0.02..0.02)).max(0.5);

        ScadaSnapshot {
            wind_speed,
            rpm,
            pitch,
            power,
            gen_temp,
            gb_temp,
            vibration,
        }
    }

    /// Parameter set this simulator was built with
    pub fn params(&self) -> &TurbineParams {
        &self.params
    }
}
