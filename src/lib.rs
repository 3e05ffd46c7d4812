pub mod config;
pub mod engine;
pub mod pilot;
pub mod sim;
pub mod utils;
pub mod wind;

pub use config::{ConfigError, ControllerConfig, ScenarioConfig, SimConfig, WindConfig};
pub use engine::{
    AircraftState, ControlChannel, EngineConfig, EngineError, FlightDynamics, KinematicEngine,
};
pub use pilot::{crab_angle_deg, response_delay_s, ControlCommand, ControlMode, PilotController};
pub use sim::{
    CrosswindSimulator, DeviationMetrics, RunOutcome, SimulationResult, StepRecord, TrackReference,
};
pub use utils::{normalize_angle_deg, SimError};
pub use wind::{WindModel, WindSample};
