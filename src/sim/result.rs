use serde::{Deserialize, Serialize};

use super::deviation::DeviationMetrics;
use crate::engine::AircraftState;

/// One completed simulation step: the engine snapshot merged with the
/// derived track metrics. Serializes as a single flat row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    #[serde(flatten)]
    pub state: AircraftState,
    #[serde(flatten)]
    pub deviation: DeviationMetrics,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The loop exhausted the configured number of steps.
    Completed,
    /// The engine reported a step failure; the time series is partial.
    Aborted { time_s: f64 },
}

/// Ordered per-step time series of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    records: Vec<StepRecord>,
    outcome: RunOutcome,
}

impl SimulationResult {
    pub(crate) fn new(records: Vec<StepRecord>, outcome: RunOutcome) -> Self {
        Self { records, outcome }
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn outcome(&self) -> RunOutcome {
        self.outcome
    }

    pub fn completed(&self) -> bool {
        self.outcome == RunOutcome::Completed
    }

    /// Number of completed steps.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.records.iter()
    }

    pub fn final_record(&self) -> Option<&StepRecord> {
        self.records.last()
    }

    pub fn final_lateral_deviation_m(&self) -> Option<f64> {
        self.final_record().map(|r| r.deviation.lateral_deviation_m)
    }

    /// Largest lateral-deviation magnitude seen during the run.
    pub fn max_lateral_deviation_m(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.deviation.lateral_deviation_m.abs())
            .fold(None, |acc, value| {
                Some(acc.map_or(value, |max: f64| max.max(value)))
            })
    }
}

impl<'a> IntoIterator for &'a SimulationResult {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
