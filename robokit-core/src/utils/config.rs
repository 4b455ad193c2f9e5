//! Configuration used to initialize a [`Robot`](crate::utils::Robot).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid robot configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` must be a finite number, got {value}")]
    NonFiniteSpeed { field: &'static str, value: f32 },
}

/// Robot settings. Read-only once the robot is built.
///
/// Speeds are magnitudes; the facade decides the sign from the requested
/// direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    pub name: String,
    pub voice_enabled: bool,
    pub default_speed: f32,
    pub turn_speed: f32,
    pub say_hello_on_start: bool,
    pub greeting_message: String,
    /// Team-specific extension settings.
    pub extra: Map<String, Value>,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            name: "EGR101 Robot".into(),
            voice_enabled: true,
            default_speed: 0.5,
            turn_speed: 0.4,
            say_hello_on_start: true,
            greeting_message: "Hello! I'm ready for the EGR 101 competition.".into(),
            extra: Map::new(),
        }
    }
}

impl RobotConfig {
    /// Parse a JSON document, filling omitted fields with defaults.
    ///
    /// ```rust
    /// use robokit_core::utils::RobotConfig;
    ///
    /// let config = RobotConfig::from_json(r#"{ "voice_enabled": false }"#).unwrap();
    /// assert!(!config.voice_enabled);
    /// assert_eq!(config.default_speed, 0.5);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that both speeds are finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("default_speed", self.default_speed),
            ("turn_speed", self.turn_speed),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteSpeed { field, value });
            }
        }
        Ok(())
    }

    /// Retrieve an extra configuration value.
    pub fn get(
        &self,
        key: &str,
    ) -> Option<&Value> {
        self.extra.get(key)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = RobotConfig::default();
        assert_eq!(config.name, "EGR101 Robot");
        assert!(config.voice_enabled);
        assert_eq!(config.default_speed, 0.5);
        assert_eq!(config.turn_speed, 0.4);
        assert!(config.say_hello_on_start);
        assert!(config.extra.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults_and_extras() {
        let config = RobotConfig::from_json(
            r#"{ "name": "Rover", "turn_speed": 0.25, "extra": { "team": 7, "led": "blue" } }"#,
        )
        .unwrap();
        assert_eq!(config.name, "Rover");
        assert_eq!(config.turn_speed, 0.25);
        assert_eq!(config.default_speed, 0.5);
        assert_eq!(config.get("team"), Some(&json!(7)));
        assert_eq!(config.get("led"), Some(&json!("blue")));
        assert_eq!(config.get("missing"), None);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = RobotConfig::from_json("{ name: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_non_finite_speed_is_rejected() {
        let config = RobotConfig {
            default_speed: f32::INFINITY,
            ..RobotConfig::default()
        };
        match config.validate() {
            Err(ConfigError::NonFiniteSpeed { field, .. }) => assert_eq!(field, "default_speed"),
            other => panic!("expected NonFiniteSpeed, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_speed_in_json_is_rejected() {
        let err = RobotConfig::from_json(r#"{ "turn_speed": 1e300 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonFiniteSpeed {
                field: "turn_speed",
                ..
            }
        ));
    }
}
