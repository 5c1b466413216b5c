//! Params - Turbine Parameter Set
//!
//! Physical and operational constants for one turbine. Read-only after
//! startup; the simulator and twin engine only look values up.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Immutable physical/operational constants for a single turbine.
///
/// Defaults describe a generic 2 MW machine at sea level. Any subset can be
/// overridden from the config file; `validate` must pass before first use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurbineParams {
    /// Air density (kg/m³)
    pub air_density: f64,
    /// Rotor radius (m)
    pub rotor_radius: f64,
    /// Rated electrical power (W)
    pub rated_power: f64,
    /// Combined electrical and mechanical efficiency
    pub efficiency: f64,
    /// Cut-in wind speed (m/s)
    pub cut_in_wind: f64,
    /// Rated wind speed (m/s)
    pub rated_wind: f64,
    /// Cut-out wind speed (m/s)
    pub cut_out_wind: f64,
    /// Minimum rotor speed (RPM)
    pub min_rpm: f64,
    /// Maximum rotor speed (RPM)
    pub max_rpm: f64,
    /// Minimum blade pitch (degrees)
    pub min_pitch: f64,
    /// Maximum blade pitch (degrees)
    pub max_pitch: f64,
    /// Maximum power coefficient (Betz limit)
    pub cp_max: f64,
    /// Typical operating power coefficient
    pub cp_nominal: f64,
    /// Generator temperature warning threshold (°C)
    pub gen_temp_warn: f64,
    /// Generator temperature critical threshold (°C)
    pub gen_temp_crit: f64,
    /// Gearbox temperature warning threshold (°C)
    pub gb_temp_warn: f64,
    /// Gearbox temperature critical threshold (°C)
    pub gb_temp_crit: f64,
    /// Vibration warning threshold (mm/s RMS)
    pub vib_warn: f64,
    /// Vibration critical threshold (mm/s RMS)
    pub vib_crit: f64,
}

impl Default for TurbineParams {
    fn default() -> Self {
        Self {
            air_density: 1.225,
            rotor_radius: 40.0,
            rated_power: 2_000_000.0,
            efficiency: 0.92,
            cut_in_wind: 3.0,
            rated_wind: 12.0,
            cut_out_wind: 25.0,
            min_rpm: 3.0,
            max_rpm: 18.0,
            min_pitch: 0.0,
            max_pitch: 25.0,
            cp_max: 0.59,
            cp_nominal: 0.45,
            gen_temp_warn: 85.0,
            gen_temp_crit: 95.0,
            gb_temp_warn: 90.0,
            gb_temp_crit: 100.0,
            vib_warn: 6.0,
            vib_crit: 10.0,
        }
    }
}

impl TurbineParams {
    /// Rotor swept area (m²)
    pub fn swept_area(&self) -> f64 {
        PI * self.rotor_radius * self.rotor_radius
    }

    /// Check internal consistency.
    ///
    /// An inconsistent parameter set would silently misclassify health, so
    /// the caller must treat a failure here as fatal.
    pub fn validate(&self) -> Result<()> {
        check(self.air_density > 0.0, "air_density must be positive")?;
        check(self.rotor_radius > 0.0, "rotor_radius must be positive")?;
        check(self.rated_power > 0.0, "rated_power must be positive")?;
        check(
            self.efficiency > 0.0 && self.efficiency <= 1.0,
            "efficiency must be in (0, 1]",
        )?;
        check(
            self.rated_wind > self.cut_in_wind,
            "rated_wind must exceed cut_in_wind",
        )?;
        check(
            self.cut_out_wind > self.rated_wind,
            "cut_out_wind must exceed rated_wind",
        )?;
        check(self.max_rpm > self.min_rpm, "max_rpm must exceed min_rpm")?;
        check(
            self.max_pitch >= self.min_pitch,
            "max_pitch must not be below min_pitch",
        )?;
        check(
            self.cp_max >= self.cp_nominal,
            "cp_max must not be below cp_nominal",
        )?;
        check(
            self.gen_temp_warn < self.gen_temp_crit,
            "gen_temp_warn must be below gen_temp_crit",
        )?;
        check(
            self.gb_temp_warn < self.gb_temp_crit,
            "gb_temp_warn must be below gb_temp_crit",
        )?;
        check(self.vib_warn < self.vib_crit, "vib_warn must be below vib_crit")?;
        Ok(())
    }
}

fn check(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::Invalid {
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_consistent() {
        assert!(TurbineParams::default().validate().is_ok());
    }

    #[test]
    fn test_swept_area() {
        let params = TurbineParams::default();
        assert!((params.swept_area() - PI * 1600.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_rated_wind_below_cut_in() {
        let params = TurbineParams {
            rated_wind: 2.0,
            ..TurbineParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_rpm_limits() {
        let params = TurbineParams {
            min_rpm: 20.0,
            ..TurbineParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_warn_at_or_above_crit() {
        let params = TurbineParams {
            gen_temp_warn: 95.0,
            ..TurbineParams::default()
        };
        assert!(params.validate().is_err());

        let params = TurbineParams {
            vib_warn: 12.0,
            ..TurbineParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_efficiency() {
        let params = TurbineParams {
            efficiency: 1.2,
            ..TurbineParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_partial_toml_override() {
        let params: TurbineParams = toml::from_str("rotor_radius = 50.0").unwrap();
        assert_eq!(params.rotor_radius, 50.0);
        assert_eq!(params.rated_power, 2_000_000.0);
    }
}
