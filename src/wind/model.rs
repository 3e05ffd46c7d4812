use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::WindConfig;
use crate::utils::{wrap_compass_deg, FPS_PER_MPS};

/// Wind velocity sample in the engine's NED frame (ft/s), tagged with
/// the simulated time it applies to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSample {
    pub time_s: f64,
    pub north_fps: f64,
    pub east_fps: f64,
    pub down_fps: f64,
}

/// Steady base wind with optional stochastic turbulence.
///
/// The base wind is a polar vector (speed in m/s, compass direction in
/// degrees). Turbulence perturbs speed, direction, and the vertical
/// component with independent Gaussian draws per sample; draws are not
/// correlated in time. The random source is owned per instance and can
/// be seeded for reproducible runs.
#[derive(Debug, Clone)]
pub struct WindModel {
    base_speed_mps: f64,
    base_direction_deg: f64,
    turbulence_intensity: f64,
    rng: ChaCha8Rng,
}

impl WindModel {
    pub fn new(speed_mps: f64, direction_deg: f64, turbulence_intensity: f64) -> Self {
        Self::with_rng(
            speed_mps,
            direction_deg,
            turbulence_intensity,
            ChaCha8Rng::from_entropy(),
        )
    }

    /// Same as [`WindModel::new`] but with a fixed turbulence seed.
    pub fn with_seed(
        speed_mps: f64,
        direction_deg: f64,
        turbulence_intensity: f64,
        seed: u64,
    ) -> Self {
        Self::with_rng(
            speed_mps,
            direction_deg,
            turbulence_intensity,
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    pub fn from_config(config: &WindConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(
                config.speed_mps,
                config.direction_deg,
                config.turbulence_intensity,
                seed,
            ),
            None => Self::new(
                config.speed_mps,
                config.direction_deg,
                config.turbulence_intensity,
            ),
        }
    }

    fn with_rng(
        speed_mps: f64,
        direction_deg: f64,
        turbulence_intensity: f64,
        rng: ChaCha8Rng,
    ) -> Self {
        let model = Self {
            base_speed_mps: speed_mps.max(0.0),
            base_direction_deg: wrap_compass_deg(direction_deg),
            turbulence_intensity: turbulence_intensity.max(0.0),
            rng,
        };
        info!(
            "WindModel initialized: speed={:.1}m/s direction={:.1}deg turbulence={:.2}",
            model.base_speed_mps, model.base_direction_deg, model.turbulence_intensity
        );
        model
    }

    /// Pure crosswind for a north-flying aircraft: from the right (90
    /// degrees) or from the left (270 degrees).
    pub fn pure_crosswind(speed_mps: f64, from_right: bool) -> Self {
        let direction_deg = if from_right { 90.0 } else { 270.0 };
        Self::new(speed_mps, direction_deg, 0.0)
    }

    /// Crosswind combined with a headwind (positive) or tailwind
    /// (negative), composed into a single polar wind vector.
    pub fn crosswind_with_headwind(crosswind_mps: f64, headwind_mps: f64, from_right: bool) -> Self {
        let speed_mps = crosswind_mps.hypot(headwind_mps);
        let mut direction_deg = crosswind_mps.atan2(headwind_mps).to_degrees();
        if !from_right {
            direction_deg = -direction_deg;
        }
        Self::new(speed_mps, wrap_compass_deg(direction_deg), 0.0)
    }

    pub fn base_speed_mps(&self) -> f64 {
        self.base_speed_mps
    }

    pub fn base_direction_deg(&self) -> f64 {
        self.base_direction_deg
    }

    pub fn turbulence_intensity(&self) -> f64 {
        self.turbulence_intensity
    }

    /// Samples the wind for the given simulated time, in engine units.
    ///
    /// Without turbulence the result is a deterministic function of the
    /// base speed and direction; the vertical component is zero. With
    /// turbulence, speed, direction, and the vertical component are
    /// each perturbed by an independent zero-mean Gaussian draw, and
    /// the perturbed speed is floored at zero.
    pub fn sample(&mut self, time_s: f64, add_turbulence: bool) -> WindSample {
        let mut speed_mps = self.base_speed_mps;
        let mut direction_deg = self.base_direction_deg;
        let mut down_mps = 0.0;

        if add_turbulence && self.turbulence_intensity > 0.0 {
            let speed_sigma = self.base_speed_mps * self.turbulence_intensity * 0.2;
            speed_mps = (speed_mps + self.gaussian() * speed_sigma).max(0.0);
            direction_deg += self.gaussian() * 15.0 * self.turbulence_intensity;
            down_mps = self.gaussian() * self.base_speed_mps * self.turbulence_intensity * 0.1;
        }

        let speed_fps = speed_mps * FPS_PER_MPS;
        let direction_rad = direction_deg.to_radians();
        WindSample {
            time_s,
            north_fps: speed_fps * direction_rad.cos(),
            east_fps: speed_fps * direction_rad.sin(),
            down_fps: down_mps * FPS_PER_MPS,
        }
    }

    /// Signed crosswind relative to the aircraft heading, in m/s.
    /// Positive means the wind pushes toward the aircraft's right.
    pub fn crosswind_component(&self, aircraft_heading_deg: f64) -> f64 {
        let relative_rad = (self.base_direction_deg - aircraft_heading_deg).to_radians();
        self.base_speed_mps * relative_rad.sin()
    }

    /// Signed headwind relative to the aircraft heading, in m/s.
    /// Positive is a headwind, negative a tailwind.
    pub fn headwind_component(&self, aircraft_heading_deg: f64) -> f64 {
        let relative_rad = (self.base_direction_deg - aircraft_heading_deg).to_radians();
        self.base_speed_mps * relative_rad.cos()
    }

    /// Standard normal draw via the Box-Muller transform.
    fn gaussian(&mut self) -> f64 {
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = self.rng.gen();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}
