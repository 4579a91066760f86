//! Composite indices, min-max normalization and high/low selection.

use crate::logic::aggregate::{UnitAccumulator, UnitLedger};
use crate::logic::filter::filter_matches;
use crate::models::{
    AnalysisConfig, AnalysisError, MatchFilter, MatchRecord, PerMinuteStats, RankingEntry, Roster,
    ScoreWeights, UnitKey, UnitRankings,
};
use std::cmp::Ordering;

/// Raw per-minute composites of one unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawIndices {
    pub offensive: f64,
    /// Always <= 0 with the default weights.
    pub defensive_signed: f64,
    pub total: f64,
}

impl RawIndices {
    /// Compute the three formulas for an accumulator with non-zero on-court time.
    pub fn compute(acc: &UnitAccumulator, weights: &ScoreWeights) -> Self {
        let minutes = f64::from(acc.total_on_court_seconds) / 60.0;
        let offensive = (f64::from(acc.goals_scored) * weights.goal_scored
            + f64::from(acc.shots_on_target) * weights.shot_on_target
            + f64::from(acc.passes_correct) * weights.pass_correct
            + f64::from(acc.tackles_with_possession) * weights.tackle_with_possession)
            / minutes;
        let defensive_signed = (f64::from(acc.goals_conceded) * weights.goal_conceded
            + f64::from(acc.fouls_committed) * weights.foul_committed
            + f64::from(acc.passes_wrong) * weights.pass_wrong
            + f64::from(acc.shots_off_target) * weights.shot_off_target)
            / minutes;
        let total = offensive
            + defensive_signed
            + f64::from(acc.fouls_received) * weights.foul_received / minutes;
        Self {
            offensive,
            defensive_signed,
            total,
        }
    }

    /// Defensive composite flipped so that higher is better.
    pub fn defensive_display(&self) -> f64 {
        -self.defensive_signed
    }
}

/// Min-max rescale to `[0, 100]`. A constant vector scores 100 everywhere.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    values
        .iter()
        .map(|&v| if range > 0.0 { (v - min) / range * 100.0 } else { 100.0 })
        .collect()
}

fn per_minute(acc: &UnitAccumulator) -> PerMinuteStats {
    let minutes = f64::from(acc.total_on_court_seconds) / 60.0;
    let rate = |n: u32| f64::from(n) / minutes;
    PerMinuteStats {
        goals_scored: rate(acc.goals_scored),
        goals_conceded: rate(acc.goals_conceded),
        shots_on_target: rate(acc.shots_on_target),
        shots_off_target: rate(acc.shots_off_target),
        passes_correct: rate(acc.passes_correct),
        passes_wrong: rate(acc.passes_wrong),
        tackles_with_possession: rate(acc.tackles_with_possession),
        tackles_without_possession: rate(acc.tackles_without_possession),
        fouls_committed: rate(acc.fouls_committed),
        fouls_received: rate(acc.fouls_received),
    }
}

/// Rank every qualifying unit by total raw score, best first, with normalized indices.
///
/// Ties on the total keep canonical key order so repeated runs give the same list.
pub fn rank_ledger(
    ledger: UnitLedger,
    roster: &Roster,
    config: &AnalysisConfig,
) -> Vec<RankingEntry> {
    let mut scored: Vec<(UnitKey, UnitAccumulator, RawIndices)> = ledger
        .into_qualified(config.min_on_court_seconds)
        .into_iter()
        .map(|(key, acc)| {
            let raw = RawIndices::compute(&acc, &config.weights);
            (key, acc, raw)
        })
        .collect();
    scored.sort_by(|a, b| b.2.total.partial_cmp(&a.2.total).unwrap_or(Ordering::Equal));

    let offensive = normalize(&scored.iter().map(|s| s.2.offensive).collect::<Vec<_>>());
    let defensive = normalize(&scored.iter().map(|s| s.2.defensive_display()).collect::<Vec<_>>());
    let total = normalize(&scored.iter().map(|s| s.2.total).collect::<Vec<_>>());

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (key, acc, raw))| RankingEntry {
            rank: i + 1,
            unit_key: key.to_string(),
            members: key.players().iter().map(|id| roster.member(id)).collect(),
            minutes_on_court: f64::from(acc.total_on_court_seconds) / 60.0,
            offensive_raw: raw.offensive,
            defensive_raw: raw.defensive_display(),
            total_raw: raw.total,
            offensive_index: offensive[i],
            defensive_index: defensive[i],
            total_index: total[i],
            possession_share: acc.possession_share(),
            top_scoring_method: acc.scored_methods.most_frequent().map(str::to_string),
            top_conceding_method: acc.conceded_methods.most_frequent().map(str::to_string),
            per_minute: per_minute(&acc),
        })
        .collect()
}

/// Full ranked table over the filtered matches, best first.
pub fn rank_units(
    matches: &[MatchRecord],
    roster: &Roster,
    filter: &MatchFilter,
    config: &AnalysisConfig,
) -> Result<Vec<RankingEntry>, AnalysisError> {
    config.validate()?;
    let ledger = UnitLedger::from_matches(filter_matches(matches, filter));
    Ok(rank_ledger(ledger, roster, config))
}

/// Top and bottom units over the filtered matches.
///
/// The low list is ordered worst first. With fewer than `2 * display_count` qualifying units
/// the two lists share entries.
pub fn compute_unit_rankings_with(
    matches: &[MatchRecord],
    roster: &Roster,
    filter: &MatchFilter,
    config: &AnalysisConfig,
) -> Result<UnitRankings, AnalysisError> {
    config.validate()?;
    Ok(select_rankings(matches, roster, filter, config))
}

/// Rankings over every match with the default configuration.
pub fn compute_unit_rankings(matches: &[MatchRecord], roster: &Roster) -> UnitRankings {
    select_rankings(matches, roster, &MatchFilter::default(), &AnalysisConfig::default())
}

fn select_rankings(
    matches: &[MatchRecord],
    roster: &Roster,
    filter: &MatchFilter,
    config: &AnalysisConfig,
) -> UnitRankings {
    let selected = filter_matches(matches, filter);
    let used = selected.len();
    let ledger = UnitLedger::from_matches(selected);
    let units_considered = ledger.len();
    let ranked = rank_ledger(ledger, roster, config);

    log::info!(
        "Ranked units over {} of {} matches: {} units seen, {} qualified",
        used,
        matches.len(),
        units_considered,
        ranked.len()
    );

    let n = config.display_count;
    UnitRankings {
        high_performance: ranked.iter().take(n).cloned().collect(),
        low_performance: ranked.iter().rev().take(n).cloned().collect(),
        units_considered,
        units_qualified: ranked.len(),
    }
}
