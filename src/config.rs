//! Session configuration.
//!
//! Supplied by the embedding application and read-only to the core. Loadable
//! from TOML; every field has a default, so a partial (or empty) file works:
//!
//! ```toml
//! port_name = "COM7"
//! fire_key = "MouseLeft"
//! ```

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Serial port the telemetry hardware is expected on.
    pub port_name: String,

    /// Baud rate of the serial link.
    pub baud_rate: u32,

    /// Scale applied to the normalized, dead-zone filtered gyro reading to
    /// turn it into degrees.
    pub vertical_angle_factor: f32,

    /// Key identifier the local source treats as the fire trigger. Meaning is
    /// up to the [`HostInput`](crate::local::HostInput) implementation.
    pub fire_key: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            port_name: "COM4".to_string(),
            baud_rate: 9600,
            vertical_angle_factor: 45.0,
            fire_key: "Space".to_string(),
        }
    }
}

impl InputConfig {
    /// Loads the config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| InputError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| InputError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = InputConfig::default();
        assert_eq!(config.port_name, "COM4");
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.vertical_angle_factor, 45.0);
    }

    #[test]
    fn partial_toml_keeps_defaults_for_the_rest() {
        let config: InputConfig = toml::from_str("port_name = \"COM7\"").unwrap();
        assert_eq!(config.port_name, "COM7");
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.vertical_angle_factor, 45.0);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: InputConfig = toml::from_str("").unwrap();
        assert_eq!(config.port_name, "COM4");
    }
}
