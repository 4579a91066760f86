//! Ranking output: one entry per qualifying unit, plus the high/low selection.

use crate::models::roster::UnitMember;
use serde::{Deserialize, Serialize};

/// Raw counters divided by minutes on court.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerMinuteStats {
    pub goals_scored: f64,
    pub goals_conceded: f64,
    pub shots_on_target: f64,
    pub shots_off_target: f64,
    pub passes_correct: f64,
    pub passes_wrong: f64,
    pub tackles_with_possession: f64,
    pub tackles_without_possession: f64,
    pub fouls_committed: f64,
    pub fouls_received: f64,
}

/// A ranked unit with its display payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-based position by total raw score.
    pub rank: usize,
    /// Canonical unit key, members joined by commas.
    pub unit_key: String,
    pub members: Vec<UnitMember>,
    pub minutes_on_court: f64,
    pub offensive_raw: f64,
    /// Defensive composite with the sign flipped: zero is a clean sheet, higher is better.
    pub defensive_raw: f64,
    pub total_raw: f64,
    pub offensive_index: f64,
    pub defensive_index: f64,
    pub total_index: f64,
    /// Percentage of possession time with the ball while this unit played.
    pub possession_share: f64,
    pub top_scoring_method: Option<String>,
    pub top_conceding_method: Option<String>,
    pub per_minute: PerMinuteStats,
}

/// Result of a ranking computation. Both lists are empty when no unit qualifies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitRankings {
    /// Best units first.
    pub high_performance: Vec<RankingEntry>,
    /// Worst units first.
    pub low_performance: Vec<RankingEntry>,
    /// Distinct units seen across the matches.
    pub units_considered: usize,
    /// Units that passed the minimum on-court threshold.
    pub units_qualified: usize,
}

impl UnitRankings {
    pub fn is_empty(&self) -> bool {
        self.high_performance.is_empty() && self.low_performance.is_empty()
    }
}
