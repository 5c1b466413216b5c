//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

/// Load a TOML config file, falling back to defaults when the file is
/// absent. A file that exists but fails to parse is an error, not a
/// silent fallback.
pub fn load_config<T: DeserializeOwned + Default>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Save a TOML config file
pub fn save_config<T: Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Write a value as pretty-printed JSON (history export)
pub fn export_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("turbine-twin-{name}"))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config: AppConfig = load_config(temp_path("does-not-exist.toml")).unwrap();
        assert!(config.turbine.validate().is_ok());
    }

    #[test]
    fn test_config_round_trip() {
        let path = temp_path("round-trip.toml");
        let mut config = AppConfig::default();
        config.run.device_id = "WTG-042".to_string();
        config.turbine.rotor_radius = 45.0;

        save_config(&path, &config).unwrap();
        let loaded: AppConfig = load_config(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.run.device_id, "WTG-042");
        assert_eq!(loaded.turbine.rotor_radius, 45.0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_path("malformed.toml");
        fs::write(&path, "run = \"not a table\"").unwrap();
        let result: Result<AppConfig> = load_config(&path);
        let _ = fs::remove_file(&path);
        assert!(result.is_err());
    }
}
