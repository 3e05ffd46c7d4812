mod error;
mod kinematic;
mod state;
mod traits;

pub use error::EngineError;
pub use kinematic::KinematicEngine;
pub use state::AircraftState;
pub use traits::{ControlChannel, FlightDynamics};

use serde::{Deserialize, Serialize};

/// Construction-time configuration for a flight-dynamics engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub aircraft_model: String,
    pub dt_s: f64,
    pub init_altitude_ft: f64,
    pub init_airspeed_kts: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            aircraft_model: "c172p".to_string(),
            dt_s: 0.01,
            init_altitude_ft: 1000.0,
            init_airspeed_kts: 60.0,
        }
    }
}

/// Handling parameters the kinematic engine needs per aircraft model.
#[derive(Debug, Clone, Copy)]
pub struct AircraftPerformance {
    /// Bank angle reached at full aileron deflection (degrees).
    pub max_bank_deg: f64,
    /// First-order roll response time constant (seconds).
    pub roll_time_constant_s: f64,
}

impl AircraftPerformance {
    pub fn for_model(name: &str) -> Option<Self> {
        match name {
            "c172p" => Some(Self {
                max_bank_deg: 25.0,
                roll_time_constant_s: 0.5,
            }),
            "pa28" => Some(Self {
                max_bank_deg: 30.0,
                roll_time_constant_s: 0.6,
            }),
            _ => None,
        }
    }
}
