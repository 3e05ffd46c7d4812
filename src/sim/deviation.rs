use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::engine::AircraftState;
use crate::utils::normalize_angle_deg;
use crate::wind::WindModel;

/// Track-relative metrics derived from one aircraft state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviationMetrics {
    /// Signed distance from the intended track, positive to the right.
    pub lateral_deviation_m: f64,
    /// Progress along the intended track.
    pub along_track_m: f64,
    /// Straight-line distance from the starting position.
    pub total_distance_m: f64,
    /// Heading minus actual ground track, in (-180, 180].
    pub drift_angle_deg: f64,
    /// Crosswind at the aircraft's current heading, m/s.
    pub crosswind_mps: f64,
}

/// Intended straight track, frozen at simulation start.
///
/// All deviation metrics are measured against the position and heading
/// captured here, never against a moving reference.
#[derive(Debug, Clone, Copy)]
pub struct TrackReference {
    origin_north_m: f64,
    origin_east_m: f64,
    intended_heading_deg: f64,
}

impl TrackReference {
    pub fn capture(state: &AircraftState, intended_heading_deg: f64) -> Self {
        Self {
            origin_north_m: state.north_m,
            origin_east_m: state.east_m,
            intended_heading_deg,
        }
    }

    pub fn intended_heading_deg(&self) -> f64 {
        self.intended_heading_deg
    }

    pub fn metrics(&self, state: &AircraftState, wind: &WindModel) -> DeviationMetrics {
        // Planar displacement from the start, (east, north).
        let displacement = Vector2::new(
            state.east_m - self.origin_east_m,
            state.north_m - self.origin_north_m,
        );

        let heading_rad = self.intended_heading_deg.to_radians();
        let lateral_deviation_m =
            displacement.x * heading_rad.cos() - displacement.y * heading_rad.sin();
        let along_track_m = displacement.x * heading_rad.sin() + displacement.y * heading_rad.cos();

        let ground_track_deg = state.v_east_fps.atan2(state.v_north_fps).to_degrees();
        let drift_angle_deg = normalize_angle_deg(state.yaw_deg - ground_track_deg);

        DeviationMetrics {
            lateral_deviation_m,
            along_track_m,
            total_distance_m: displacement.norm(),
            drift_angle_deg,
            crosswind_mps: wind.crosswind_component(state.yaw_deg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn state_at(north_m: f64, east_m: f64) -> AircraftState {
        AircraftState {
            north_m,
            east_m,
            v_north_fps: 1.0,
            ..AircraftState::default()
        }
    }

    #[test]
    fn north_track_projections() {
        let reference = TrackReference::capture(&state_at(0.0, 0.0), 0.0);
        let wind = WindModel::new(0.0, 0.0, 0.0);
        let metrics = reference.metrics(&state_at(200.0, 100.0), &wind);
        assert_relative_eq!(metrics.lateral_deviation_m, 100.0, epsilon = 1e-9);
        assert_relative_eq!(metrics.along_track_m, 200.0, epsilon = 1e-9);
        assert_relative_eq!(
            metrics.total_distance_m,
            (200.0_f64.powi(2) + 100.0_f64.powi(2)).sqrt(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn east_track_projections() {
        let reference = TrackReference::capture(&state_at(0.0, 0.0), 90.0);
        let wind = WindModel::new(0.0, 0.0, 0.0);
        let metrics = reference.metrics(&state_at(200.0, 100.0), &wind);
        // Flying east, north of track is to the left.
        assert_relative_eq!(metrics.lateral_deviation_m, -200.0, epsilon = 1e-9);
        assert_relative_eq!(metrics.along_track_m, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn offset_origin_is_subtracted() {
        let reference = TrackReference::capture(&state_at(50.0, -25.0), 0.0);
        let wind = WindModel::new(0.0, 0.0, 0.0);
        let metrics = reference.metrics(&state_at(150.0, -25.0), &wind);
        assert_relative_eq!(metrics.lateral_deviation_m, 0.0, epsilon = 1e-9);
        assert_relative_eq!(metrics.along_track_m, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn drift_angle_from_velocity() {
        let reference = TrackReference::capture(&state_at(0.0, 0.0), 0.0);
        let wind = WindModel::new(0.0, 0.0, 0.0);
        let state = AircraftState {
            yaw_deg: 0.0,
            v_north_fps: 100.0,
            v_east_fps: 100.0,
            ..AircraftState::default()
        };
        // Tracking 45 deg right of the nose: drift is -45.
        let metrics = reference.metrics(&state, &wind);
        assert_relative_eq!(metrics.drift_angle_deg, -45.0, epsilon = 1e-9);
    }

    #[test]
    fn drift_angle_boundary_maps_to_positive_180() {
        let reference = TrackReference::capture(&state_at(0.0, 0.0), 0.0);
        let wind = WindModel::new(0.0, 0.0, 0.0);
        let state = AircraftState {
            yaw_deg: 0.0,
            v_north_fps: -100.0,
            v_east_fps: 0.0,
            ..AircraftState::default()
        };
        let metrics = reference.metrics(&state, &wind);
        assert_relative_eq!(metrics.drift_angle_deg, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn crosswind_is_delegated_to_the_wind_model() {
        let reference = TrackReference::capture(&state_at(0.0, 0.0), 0.0);
        let wind = WindModel::new(10.0, 90.0, 0.0);
        let metrics = reference.metrics(&state_at(0.0, 0.0), &wind);
        assert_relative_eq!(metrics.crosswind_mps, 10.0, epsilon = 1e-9);
    }
}
