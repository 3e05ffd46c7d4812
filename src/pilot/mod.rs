mod behavior;
mod controller;

pub use behavior::{crab_angle_deg, response_delay_s};
pub use controller::{ControlCommand, ControlMode, PilotController};
