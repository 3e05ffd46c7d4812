use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown aircraft model: {0}")]
    UnknownAircraft(String),

    #[error("Invalid timestep: {0}")]
    InvalidTimestep(f64),

    #[error("Invalid initial condition: {0}")]
    InvalidInitialCondition(String),

    #[error("Engine state diverged at t={time_s:.2}s")]
    Diverged { time_s: f64 },

    #[error("Engine session is closed")]
    SessionClosed,
}
