mod deviation;
mod result;
mod simulator;

pub use deviation::{DeviationMetrics, TrackReference};
pub use result::{RunOutcome, SimulationResult, StepRecord};
pub use simulator::CrosswindSimulator;
