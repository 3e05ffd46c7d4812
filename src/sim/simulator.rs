use log::{info, warn};
use rayon::prelude::*;

use super::deviation::TrackReference;
use super::result::{RunOutcome, SimulationResult, StepRecord};
use crate::config::{ScenarioConfig, SimConfig};
use crate::engine::{ControlChannel, FlightDynamics, KinematicEngine};
use crate::pilot::{ControlMode, PilotController};
use crate::utils::SimError;
use crate::wind::WindModel;

/// Fixed-timestep crosswind simulation over a flight-dynamics engine.
///
/// Owns exactly one engine session for its lifetime; the session is
/// released by `close` and never outlives the simulator. Each step runs
/// the strict sequence: sample wind, optionally compute a control
/// command, advance the engine, read back the state, derive the track
/// metrics, append the record.
pub struct CrosswindSimulator<E: FlightDynamics> {
    engine: E,
    wind: WindModel,
    dt_s: f64,
    reference: TrackReference,
}

impl CrosswindSimulator<KinematicEngine> {
    /// Builds a simulator over the in-tree kinematic engine.
    pub fn new(scenario: &ScenarioConfig) -> Result<Self, SimError> {
        scenario.validate()?;
        let engine = KinematicEngine::new(scenario.sim.engine_config())?;
        let wind = WindModel::from_config(&scenario.wind);
        Ok(Self::with_engine(engine, wind, scenario.sim.dt_s)
            .with_track_heading(scenario.track_heading_deg))
    }

    /// Runs one independent no-correction simulation per wind speed, a
    /// pure 90-degree crosswind each time. Runs share nothing and
    /// execute in parallel; the returned pairs preserve input order.
    pub fn compare_wind_speeds(
        wind_speeds: &[f64],
        duration_s: f64,
        sim: &SimConfig,
    ) -> Result<Vec<(f64, SimulationResult)>, SimError> {
        wind_speeds
            .par_iter()
            .map(|&speed_mps| {
                let engine = KinematicEngine::new(sim.engine_config())?;
                let wind = WindModel::pure_crosswind(speed_mps, true);
                let mut simulator = Self::with_engine(engine, wind, sim.dt_s);
                let result = simulator.run(duration_s, None);
                simulator.close();
                Ok((speed_mps, result))
            })
            .collect()
    }

    /// Runs the same scenario once per control law, each run with its
    /// own engine instance, in parallel.
    pub fn compare_control_modes(
        modes: &[ControlMode],
        duration_s: f64,
        scenario: &ScenarioConfig,
    ) -> Result<Vec<(ControlMode, SimulationResult)>, SimError> {
        modes
            .par_iter()
            .map(|&mode| {
                let mut simulator = Self::new(scenario)?;
                let mut controller = scenario
                    .controller
                    .as_ref()
                    .map(PilotController::from_config)
                    .unwrap_or_default();
                controller.set_mode(mode);
                let result = simulator.run(duration_s, Some(&mut controller));
                simulator.close();
                Ok((mode, result))
            })
            .collect()
    }
}

impl<E: FlightDynamics> CrosswindSimulator<E> {
    /// Wraps an already-configured engine. The intended track heading
    /// defaults to true north; the reference position is captured from
    /// the engine's current state.
    pub fn with_engine(engine: E, wind: WindModel, dt_s: f64) -> Self {
        let reference = TrackReference::capture(&engine.state(), 0.0);
        info!(
            "CrosswindSimulator ready: wind={:.1}m/s from {:.1}deg, dt={}s",
            wind.base_speed_mps(),
            wind.base_direction_deg(),
            dt_s
        );
        Self {
            engine,
            wind,
            dt_s,
            reference,
        }
    }

    /// Re-captures the track reference with a different intended
    /// heading, keeping the current engine position as origin.
    pub fn with_track_heading(mut self, heading_deg: f64) -> Self {
        self.reference = TrackReference::capture(&self.engine.state(), heading_deg);
        self
    }

    pub fn wind(&self) -> &WindModel {
        &self.wind
    }

    /// Swaps the wind model, e.g. between a reset and a re-run.
    pub fn set_wind_model(&mut self, wind: WindModel) {
        self.wind = wind;
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn dt_s(&self) -> f64 {
        self.dt_s
    }

    /// Runs for `duration_s` of simulated time, optionally under a
    /// pilot controller. An engine step failure halts the loop and
    /// yields the partial time series; it is never propagated.
    pub fn run(
        &mut self,
        duration_s: f64,
        controller: Option<&mut PilotController>,
    ) -> SimulationResult {
        self.run_with_progress(duration_s, controller, |_, _| {})
    }

    /// Same as [`run`](Self::run), invoking `on_step(completed, total)`
    /// after every appended record.
    pub fn run_with_progress<F>(
        &mut self,
        duration_s: f64,
        mut controller: Option<&mut PilotController>,
        mut on_step: F,
    ) -> SimulationResult
    where
        F: FnMut(usize, usize),
    {
        let num_steps = (duration_s / self.dt_s).round() as usize;
        let mut records = Vec::with_capacity(num_steps);

        for step in 0..num_steps {
            let time_s = step as f64 * self.dt_s;

            let sample = self.wind.sample(time_s, true);
            self.engine
                .set_wind(sample.north_fps, sample.east_fps, sample.down_fps);

            if let Some(controller) = controller.as_deref_mut() {
                let state = self.engine.state();
                let deviation = self.reference.metrics(&state, &self.wind);
                let command = controller
                    .control_input(&state, deviation.lateral_deviation_m, deviation.crosswind_mps)
                    .clamped();
                self.engine.set_control(ControlChannel::Aileron, command.aileron);
                self.engine.set_control(ControlChannel::Elevator, command.elevator);
                self.engine.set_control(ControlChannel::Rudder, command.rudder);
            }

            if let Err(err) = self.engine.step() {
                warn!("Simulation halted at t={:.2}s: {}", time_s, err);
                return SimulationResult::new(records, RunOutcome::Aborted { time_s });
            }

            let state = self.engine.state();
            let deviation = self.reference.metrics(&state, &self.wind);
            records.push(StepRecord { state, deviation });
            on_step(step + 1, num_steps);
        }

        let max_deviation_m = records
            .iter()
            .map(|r| r.deviation.lateral_deviation_m.abs())
            .fold(0.0, f64::max);
        info!(
            "Simulation complete: {} steps, max lateral deviation {:.2}m",
            records.len(),
            max_deviation_m
        );
        SimulationResult::new(records, RunOutcome::Completed)
    }

    /// Returns the engine to its initial conditions and re-captures the
    /// track reference from the post-reset state, so the simulator can
    /// be re-run with new wind or controller parameters.
    pub fn reset(&mut self) {
        self.engine.reset();
        let heading_deg = self.reference.intended_heading_deg();
        self.reference = TrackReference::capture(&self.engine.state(), heading_deg);
        info!("Simulation reset");
    }

    /// Releases the engine session.
    pub fn close(mut self) {
        self.engine.close();
    }
}
