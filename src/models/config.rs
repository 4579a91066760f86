//! Analysis configuration: qualification threshold, display size and index weights.

use crate::models::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// Coefficients of the three composite formulas. Applied per event, then divided by minutes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub goal_scored: f64,
    pub shot_on_target: f64,
    pub pass_correct: f64,
    pub tackle_with_possession: f64,
    pub goal_conceded: f64,
    pub foul_committed: f64,
    pub pass_wrong: f64,
    pub shot_off_target: f64,
    pub foul_received: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            goal_scored: 4.0,
            shot_on_target: 1.5,
            pass_correct: 0.05,
            tackle_with_possession: 1.0,
            goal_conceded: -4.0,
            foul_committed: -1.0,
            pass_wrong: -0.05,
            shot_off_target: -0.5,
            foul_received: 0.5,
        }
    }
}

impl ScoreWeights {
    fn all(&self) -> [f64; 9] {
        [
            self.goal_scored,
            self.shot_on_target,
            self.pass_correct,
            self.tackle_with_possession,
            self.goal_conceded,
            self.foul_committed,
            self.pass_wrong,
            self.shot_off_target,
            self.foul_received,
        ]
    }
}

/// Settings for one ranking computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Units with less combined on-court time are dropped before ranking.
    pub min_on_court_seconds: u32,
    /// Size of the high and low performance lists.
    pub display_count: usize,
    pub weights: ScoreWeights,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_on_court_seconds: 180,
            display_count: 3,
            weights: ScoreWeights::default(),
        }
    }
}

impl AnalysisConfig {
    /// Check the preconditions the ranking relies on (non-zero minutes, finite weights).
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.min_on_court_seconds == 0 {
            return Err(AnalysisError::InvalidConfig(
                "min_on_court_seconds must be greater than zero".to_string(),
            ));
        }
        if self.display_count == 0 {
            return Err(AnalysisError::InvalidConfig(
                "display_count must be greater than zero".to_string(),
            ));
        }
        if self.weights.all().iter().any(|w| !w.is_finite()) {
            return Err(AnalysisError::InvalidConfig(
                "weights must be finite numbers".to_string(),
            ));
        }
        Ok(())
    }
}
