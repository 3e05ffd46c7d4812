use log::info;
use serde::{Deserialize, Serialize};

use crate::config::ControllerConfig;
use crate::engine::AircraftState;
use crate::utils::normalize_angle_deg;

/// Pilot correction strategy, one variant per control law.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlMode {
    /// No correction at all; the aircraft drifts freely with the wind.
    #[default]
    NoCorrection,
    /// Keep the nose on the target heading; sideways drift remains.
    HeadingHold,
    /// Correct heading, lateral offset, and anticipated wind drift.
    TrackFollowing,
}

/// Normalized actuator commands, each in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlCommand {
    pub aileron: f64,
    pub elevator: f64,
    pub rudder: f64,
}

impl ControlCommand {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn clamped(self) -> Self {
        Self {
            aileron: self.aileron.clamp(-1.0, 1.0),
            elevator: self.elevator.clamp(-1.0, 1.0),
            rudder: self.rudder.clamp(-1.0, 1.0),
        }
    }
}

/// Proportional pilot model translating deviation signals into control
/// commands under the selected control law.
#[derive(Debug, Clone)]
pub struct PilotController {
    pub target_heading_deg: f64,
    /// Lateral band the pilot tolerates before intervening (meters).
    /// Consulted by `should_intervene`, not by the control laws.
    pub lateral_tolerance_m: f64,
    pub heading_gain: f64,
    pub position_gain: f64,
    mode: ControlMode,
}

impl Default for PilotController {
    fn default() -> Self {
        Self::new(0.0, 50.0, 0.02, 0.001)
    }
}

impl PilotController {
    pub fn new(
        target_heading_deg: f64,
        lateral_tolerance_m: f64,
        heading_gain: f64,
        position_gain: f64,
    ) -> Self {
        info!(
            "PilotController initialized: target={:.1}deg tolerance={:.0}m",
            target_heading_deg, lateral_tolerance_m
        );
        Self {
            target_heading_deg,
            lateral_tolerance_m,
            heading_gain,
            position_gain,
            mode: ControlMode::NoCorrection,
        }
    }

    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::new(
            config.target_heading_deg,
            config.lateral_tolerance_m,
            config.heading_gain,
            config.position_gain,
        )
        .with_mode(config.mode)
    }

    pub fn with_mode(mut self, mode: ControlMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ControlMode) {
        self.mode = mode;
    }

    /// Computes the control command for the current step.
    ///
    /// `lateral_deviation_m` is positive to the right of the intended
    /// track, `crosswind_mps` positive when the wind pushes the
    /// aircraft to the right.
    pub fn control_input(
        &self,
        state: &AircraftState,
        lateral_deviation_m: f64,
        crosswind_mps: f64,
    ) -> ControlCommand {
        let aileron = match self.mode {
            ControlMode::NoCorrection => return ControlCommand::zero(),
            ControlMode::HeadingHold => self.heading_control(state.yaw_deg),
            ControlMode::TrackFollowing => {
                self.track_control(state.yaw_deg, lateral_deviation_m, crosswind_mps)
            }
        };
        ControlCommand {
            aileron,
            elevator: 0.0,
            rudder: 0.0,
        }
    }

    fn heading_control(&self, current_heading_deg: f64) -> f64 {
        let heading_error = normalize_angle_deg(self.target_heading_deg - current_heading_deg);
        (heading_error * self.heading_gain).clamp(-1.0, 1.0)
    }

    fn track_control(
        &self,
        current_heading_deg: f64,
        lateral_deviation_m: f64,
        crosswind_mps: f64,
    ) -> f64 {
        let heading_error = normalize_angle_deg(self.target_heading_deg - current_heading_deg);
        // Rightward drift and a right-pushing wind both demand a
        // left-rolling command, hence the negative signs. The wind
        // feedforward runs at half the heading gain.
        let position_correction = -lateral_deviation_m * self.position_gain;
        let wind_feedforward = -crosswind_mps * 0.5 * self.heading_gain;
        (heading_error * self.heading_gain + position_correction + wind_feedforward)
            .clamp(-1.0, 1.0)
    }

    /// Whether the lateral deviation has left the tolerated band.
    pub fn should_intervene(&self, lateral_deviation_m: f64) -> bool {
        lateral_deviation_m.abs() > self.lateral_tolerance_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn state_with_heading(yaw_deg: f64) -> AircraftState {
        AircraftState {
            yaw_deg,
            airspeed_kts: 60.0,
            ..AircraftState::default()
        }
    }

    #[test]
    fn no_correction_returns_zero_command() {
        let controller = PilotController::default();
        let command = controller.control_input(&state_with_heading(45.0), 500.0, 15.0);
        assert_eq!(command, ControlCommand::zero());
    }

    #[test]
    fn heading_hold_commands_toward_target() {
        let controller = PilotController::default().with_mode(ControlMode::HeadingHold);
        // Nose right of target: roll left.
        let command = controller.control_input(&state_with_heading(10.0), 0.0, 0.0);
        assert_relative_eq!(command.aileron, -0.2, epsilon = 1e-9);
        assert_relative_eq!(command.elevator, 0.0);
        assert_relative_eq!(command.rudder, 0.0);
    }

    #[test]
    fn heading_hold_clamps_large_errors() {
        let controller = PilotController::default().with_mode(ControlMode::HeadingHold);
        let command = controller.control_input(&state_with_heading(120.0), 0.0, 0.0);
        assert_relative_eq!(command.aileron, -1.0);
    }

    #[test]
    fn heading_hold_takes_the_short_way_around() {
        let controller = PilotController::default().with_mode(ControlMode::HeadingHold);
        // 350 deg is 10 deg left of north, so the command rolls right.
        let command = controller.control_input(&state_with_heading(350.0), 0.0, 0.0);
        assert_relative_eq!(command.aileron, 0.2, epsilon = 1e-9);
    }

    #[test]
    fn track_following_counters_rightward_drift() {
        let controller = PilotController::default().with_mode(ControlMode::TrackFollowing);
        let command = controller.control_input(&state_with_heading(0.0), 100.0, 0.0);
        assert_relative_eq!(command.aileron, -0.1, epsilon = 1e-9);
    }

    #[test]
    fn track_following_feeds_forward_the_crosswind() {
        let controller = PilotController::default().with_mode(ControlMode::TrackFollowing);
        let command = controller.control_input(&state_with_heading(0.0), 0.0, 10.0);
        assert_relative_eq!(command.aileron, -10.0 * 0.5 * 0.02, epsilon = 1e-9);
    }

    #[test]
    fn track_following_sums_and_clamps() {
        let controller = PilotController::new(0.0, 50.0, 0.02, 0.01)
            .with_mode(ControlMode::TrackFollowing);
        let command = controller.control_input(&state_with_heading(0.0), 500.0, 20.0);
        assert_relative_eq!(command.aileron, -1.0);
    }

    #[test]
    fn intervention_threshold_is_symmetric() {
        let controller = PilotController::default();
        assert!(!controller.should_intervene(49.0));
        assert!(!controller.should_intervene(-50.0));
        assert!(controller.should_intervene(51.0));
        assert!(controller.should_intervene(-51.0));
    }

    #[test]
    fn command_clamping() {
        let command = ControlCommand {
            aileron: 2.5,
            elevator: -3.0,
            rudder: 0.5,
        }
        .clamped();
        assert_relative_eq!(command.aileron, 1.0);
        assert_relative_eq!(command.elevator, -1.0);
        assert_relative_eq!(command.rudder, 0.5);
    }
}
