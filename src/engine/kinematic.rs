use log::debug;
use nalgebra::Vector2;

use super::state::AircraftState;
use super::{AircraftPerformance, ControlChannel, EngineConfig, EngineError, FlightDynamics};
use crate::utils::{FPS_PER_MPS, MPS_PER_KNOT};

const GRAVITY_MPS2: f64 = 9.80665;

/// Deterministic point-mass engine.
///
/// A Dubins-style kinematic model: constant airspeed and altitude,
/// first-order roll response to the aileron command, coordinated-turn
/// yaw rate from the bank angle, and planar integration of air velocity
/// plus wind. It stands in for a full flight-dynamics engine wherever a
/// reproducible, fast state-transition oracle is enough.
pub struct KinematicEngine {
    config: EngineConfig,
    performance: AircraftPerformance,
    time_s: f64,
    /// Planar position, (north, east) in meters.
    position_m: Vector2<f64>,
    roll_deg: f64,
    yaw_deg: f64,
    /// Ground velocity, (north, east) in m/s.
    ground_velocity_mps: Vector2<f64>,
    wind_fps: [f64; 3],
    controls: [f64; 3],
    closed: bool,
}

impl KinematicEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        if config.dt_s <= 0.0 {
            return Err(EngineError::InvalidTimestep(config.dt_s));
        }
        if config.init_airspeed_kts < 0.0 {
            return Err(EngineError::InvalidInitialCondition(format!(
                "airspeed must be non-negative, got {} kts",
                config.init_airspeed_kts
            )));
        }
        let performance = AircraftPerformance::for_model(&config.aircraft_model)
            .ok_or_else(|| EngineError::UnknownAircraft(config.aircraft_model.clone()))?;

        debug!(
            "Kinematic engine configured: {} dt={}s alt={}ft ias={}kts",
            config.aircraft_model, config.dt_s, config.init_altitude_ft, config.init_airspeed_kts
        );

        let airspeed_mps = config.init_airspeed_kts * MPS_PER_KNOT;
        Ok(Self {
            config,
            performance,
            time_s: 0.0,
            position_m: Vector2::zeros(),
            roll_deg: 0.0,
            yaw_deg: 0.0,
            ground_velocity_mps: Vector2::new(airspeed_mps, 0.0),
            wind_fps: [0.0; 3],
            controls: [0.0; 3],
            closed: false,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn airspeed_mps(&self) -> f64 {
        self.config.init_airspeed_kts * MPS_PER_KNOT
    }
}

impl FlightDynamics for KinematicEngine {
    fn set_wind(&mut self, north_fps: f64, east_fps: f64, down_fps: f64) {
        self.wind_fps = [north_fps, east_fps, down_fps];
    }

    fn set_control(&mut self, channel: ControlChannel, value: f64) {
        let value = value.clamp(-1.0, 1.0);
        match channel {
            ControlChannel::Aileron => self.controls[0] = value,
            ControlChannel::Elevator => self.controls[1] = value,
            ControlChannel::Rudder => self.controls[2] = value,
        }
    }

    fn step(&mut self) -> Result<(), EngineError> {
        if self.closed {
            return Err(EngineError::SessionClosed);
        }
        let dt = self.config.dt_s;

        // First-order roll response toward the commanded bank angle.
        let target_roll_deg = self.controls[0] * self.performance.max_bank_deg;
        let alpha = (dt / self.performance.roll_time_constant_s).min(1.0);
        self.roll_deg += (target_roll_deg - self.roll_deg) * alpha;

        // Coordinated-turn yaw rate from the bank angle.
        let tas_mps = self.airspeed_mps();
        if tas_mps > 0.0 {
            let yaw_rate_rad = GRAVITY_MPS2 * self.roll_deg.to_radians().tan() / tas_mps;
            self.yaw_deg = (self.yaw_deg + yaw_rate_rad.to_degrees() * dt).rem_euclid(360.0);
        }

        let yaw_rad = self.yaw_deg.to_radians();
        let air_velocity = Vector2::new(tas_mps * yaw_rad.cos(), tas_mps * yaw_rad.sin());
        let wind_mps = Vector2::new(
            self.wind_fps[0] / FPS_PER_MPS,
            self.wind_fps[1] / FPS_PER_MPS,
        );
        self.ground_velocity_mps = air_velocity + wind_mps;
        self.position_m += self.ground_velocity_mps * dt;
        self.time_s += dt;

        if !self.position_m.x.is_finite() || !self.position_m.y.is_finite() || !self.yaw_deg.is_finite()
        {
            return Err(EngineError::Diverged { time_s: self.time_s });
        }
        Ok(())
    }

    fn state(&self) -> AircraftState {
        let groundspeed_mps = self.ground_velocity_mps.norm();
        AircraftState {
            time_s: self.time_s,
            north_m: self.position_m.x,
            east_m: self.position_m.y,
            altitude_ft: self.config.init_altitude_ft,
            roll_deg: self.roll_deg,
            pitch_deg: 0.0,
            yaw_deg: self.yaw_deg,
            airspeed_kts: self.config.init_airspeed_kts,
            groundspeed_kts: groundspeed_mps / MPS_PER_KNOT,
            v_north_fps: self.ground_velocity_mps.x * FPS_PER_MPS,
            v_east_fps: self.ground_velocity_mps.y * FPS_PER_MPS,
            v_down_fps: 0.0,
            wind_north_fps: self.wind_fps[0],
            wind_east_fps: self.wind_fps[1],
            wind_down_fps: self.wind_fps[2],
        }
    }

    fn reset(&mut self) {
        let airspeed_mps = self.airspeed_mps();
        self.time_s = 0.0;
        self.position_m = Vector2::zeros();
        self.roll_deg = 0.0;
        self.yaw_deg = 0.0;
        self.ground_velocity_mps = Vector2::new(airspeed_mps, 0.0);
        self.wind_fps = [0.0; 3];
        self.controls = [0.0; 3];
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
