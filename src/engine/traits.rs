use super::error::EngineError;
use super::state::AircraftState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlChannel {
    Aileron,
    Elevator,
    Rudder,
}

/// Narrow boundary to a flight-dynamics engine.
///
/// Configuration happens at construction of the concrete engine; a
/// failed configuration is a construction error, never a failed step.
/// `step` advances simulated time by the configured timestep and may
/// fail mid-run (numerical divergence, closed session); the caller is
/// expected to treat that as a soft halt rather than propagate it.
pub trait FlightDynamics {
    /// Sets the ambient wind for the next step, NED components in ft/s.
    fn set_wind(&mut self, north_fps: f64, east_fps: f64, down_fps: f64);

    /// Sets a normalized actuator command, expected in [-1, 1].
    fn set_control(&mut self, channel: ControlChannel, value: f64);

    /// Advances the simulation by one timestep.
    fn step(&mut self) -> Result<(), EngineError>;

    /// Snapshot of the aircraft state after the most recent step.
    fn state(&self) -> AircraftState;

    /// Returns to the initial conditions captured at construction.
    fn reset(&mut self);

    /// Releases the engine session; stepping afterwards is an error.
    fn close(&mut self);
}
