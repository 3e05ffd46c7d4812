use serde::{Deserialize, Serialize};

/// Aircraft state snapshot read back from the engine after a step.
///
/// Units mirror the flight-dynamics engine's native property set:
/// planar position in meters, altitude in feet, speeds in knots,
/// velocity and wind components in ft/s, angles in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    pub time_s: f64,
    pub north_m: f64,
    pub east_m: f64,
    pub altitude_ft: f64,
    pub roll_deg: f64,
    pub pitch_deg: f64,
    pub yaw_deg: f64,
    pub airspeed_kts: f64,
    pub groundspeed_kts: f64,
    pub v_north_fps: f64,
    pub v_east_fps: f64,
    pub v_down_fps: f64,
    pub wind_north_fps: f64,
    pub wind_east_fps: f64,
    pub wind_down_fps: f64,
}
