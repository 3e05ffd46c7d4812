use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineConfig;
use crate::pilot::ControlMode;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid scenario configuration: {0}")]
    ValidationError(String),
}

/// Engine-facing simulation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub aircraft_model: String,
    pub dt_s: f64,
    pub init_altitude_ft: f64,
    pub init_airspeed_kts: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            aircraft_model: "c172p".to_string(),
            dt_s: 0.01,
            init_altitude_ft: 1000.0,
            init_airspeed_kts: 60.0,
        }
    }
}

impl SimConfig {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            aircraft_model: self.aircraft_model.clone(),
            dt_s: self.dt_s,
            init_altitude_ft: self.init_altitude_ft,
            init_airspeed_kts: self.init_airspeed_kts,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    pub speed_mps: f64,
    /// Compass direction the wind blows from, degrees.
    pub direction_deg: f64,
    pub turbulence_intensity: f64,
    /// Fixed turbulence seed; omit for an entropy-seeded run.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub mode: ControlMode,
    pub target_heading_deg: f64,
    pub lateral_tolerance_m: f64,
    pub heading_gain: f64,
    pub position_gain: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            mode: ControlMode::NoCorrection,
            target_heading_deg: 0.0,
            lateral_tolerance_m: 50.0,
            heading_gain: 0.02,
            position_gain: 0.001,
        }
    }
}

/// A full scenario: engine setup, wind, and optional pilot model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub sim: SimConfig,
    pub wind: WindConfig,
    pub controller: Option<ControllerConfig>,
    /// Intended ground-track heading, degrees true.
    pub track_heading_deg: f64,
}

impl ScenarioConfig {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sim.dt_s <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "timestep must be positive, got {}",
                self.sim.dt_s
            )));
        }
        if self.wind.speed_mps < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "wind speed must be non-negative, got {}",
                self.wind.speed_mps
            )));
        }
        if self.wind.turbulence_intensity < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "turbulence intensity must be non-negative, got {}",
                self.wind.turbulence_intensity
            )));
        }
        if let Some(controller) = &self.controller {
            if controller.lateral_tolerance_m < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "lateral tolerance must be non-negative, got {}",
                    controller.lateral_tolerance_m
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_the_reference_scenario() {
        let config = ScenarioConfig::default();
        assert_eq!(config.sim.aircraft_model, "c172p");
        assert_relative_eq!(config.sim.dt_s, 0.01);
        assert_relative_eq!(config.sim.init_altitude_ft, 1000.0);
        assert_relative_eq!(config.sim.init_airspeed_kts, 60.0);
        assert_relative_eq!(config.wind.speed_mps, 0.0);
        assert!(config.controller.is_none());
    }

    #[test]
    fn parses_a_scenario_from_yaml() {
        let yaml = r#"
sim:
  aircraft_model: pa28
  dt_s: 0.02
wind:
  speed_mps: 10.0
  direction_deg: 90.0
  turbulence_intensity: 0.1
  seed: 42
controller:
  mode: TrackFollowing
  heading_gain: 0.02
  position_gain: 0.005
track_heading_deg: 0.0
"#;
        let config = ScenarioConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.sim.aircraft_model, "pa28");
        assert_relative_eq!(config.sim.dt_s, 0.02);
        assert_relative_eq!(config.wind.speed_mps, 10.0);
        assert_eq!(config.wind.seed, Some(42));
        let controller = config.controller.unwrap();
        assert_eq!(controller.mode, ControlMode::TrackFollowing);
        assert_relative_eq!(controller.position_gain, 0.005);
        // Unspecified fields fall back to defaults.
        assert_relative_eq!(controller.lateral_tolerance_m, 50.0);
    }

    #[test]
    fn rejects_non_positive_timestep() {
        let yaml = "sim:\n  dt_s: 0.0\n";
        assert!(matches!(
            ScenarioConfig::from_yaml_str(yaml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_negative_wind_speed() {
        let yaml = "wind:\n  speed_mps: -5.0\n";
        assert!(matches!(
            ScenarioConfig::from_yaml_str(yaml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(matches!(
            ScenarioConfig::from_yaml_str("wind: ["),
            Err(ConfigError::YamlError(_))
        ));
    }
}
