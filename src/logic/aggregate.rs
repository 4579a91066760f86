//! Event attribution and per-unit accumulation across matches.

use crate::logic::segments::{reconstruct_segments, segment_at};
use crate::models::{ActionKind, FoulSide, MatchEvent, MatchRecord, Segment, UnitKey};
use std::collections::BTreeMap;

/// Key used in the method tables when a goal has no method.
pub const UNKNOWN_METHOD: &str = "—";

/// Frequency table that remembers first-seen order, so ties go to the earliest key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MethodTally {
    counts: Vec<(String, u32)>,
}

impl MethodTally {
    pub fn record(&mut self, method: Option<&str>) {
        let key = match method.map(str::trim) {
            Some(m) if !m.is_empty() => m,
            _ => UNKNOWN_METHOD,
        };
        match self.counts.iter_mut().find(|(k, _)| k == key) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((key.to_string(), 1)),
        }
    }

    pub fn count(&self, method: &str) -> u32 {
        self.counts
            .iter()
            .find(|(k, _)| k == method)
            .map_or(0, |(_, n)| *n)
    }

    /// Most frequent key; `None` when nothing was recorded.
    pub fn most_frequent(&self) -> Option<&str> {
        let mut best: Option<&(String, u32)> = None;
        for entry in &self.counts {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(k, _)| k.as_str())
    }
}

/// Running totals for one unit across every match in the analysis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnitAccumulator {
    pub total_on_court_seconds: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub shots_on_target: u32,
    pub shots_off_target: u32,
    pub passes_correct: u32,
    pub passes_wrong: u32,
    pub tackles_with_possession: u32,
    /// Includes counter-attack tackles.
    pub tackles_without_possession: u32,
    pub fouls_committed: u32,
    pub fouls_received: u32,
    pub scored_methods: MethodTally,
    pub conceded_methods: MethodTally,
    pub possession_seconds_with: f64,
    pub possession_seconds_without: f64,
}

impl UnitAccumulator {
    /// Add one segment's time and its proportional share of the match possession.
    fn add_segment(&mut self, segment: &Segment, possession_with: f64, possession_without: f64) {
        self.total_on_court_seconds += segment.duration_seconds();
        self.possession_seconds_with += segment.share_of(possession_with);
        self.possession_seconds_without += segment.share_of(possession_without);
    }

    /// Apply one event that happened while `unit` was on court.
    fn add_event(&mut self, unit: &UnitKey, event: &MatchEvent) {
        let is_member = unit.contains(&event.player_id);
        match event.action_kind {
            ActionKind::Goal if event.is_opponent_event => {
                self.goals_conceded += 1;
                self.conceded_methods.record(event.method.as_deref());
            }
            ActionKind::Goal => {
                self.goals_scored += 1;
                self.scored_methods.record(event.method.as_deref());
            }
            ActionKind::Foul => match event.foul_side {
                Some(FoulSide::Committed) if is_member => self.fouls_committed += 1,
                Some(FoulSide::Received) => self.fouls_received += 1,
                _ => {}
            },
            _ if !is_member => {}
            ActionKind::PassCorrect => self.passes_correct += 1,
            ActionKind::PassWrong => self.passes_wrong += 1,
            ActionKind::ShotOnTarget => self.shots_on_target += 1,
            ActionKind::ShotOffTarget => self.shots_off_target += 1,
            ActionKind::TackleWithPossession => self.tackles_with_possession += 1,
            ActionKind::TackleWithoutPossession | ActionKind::TackleCounterAttack => {
                self.tackles_without_possession += 1
            }
        }
    }

    pub fn possession_share(&self) -> f64 {
        let total = self.possession_seconds_with + self.possession_seconds_without;
        if total > 0.0 {
            self.possession_seconds_with / total * 100.0
        } else {
            0.0
        }
    }
}

/// Accumulators keyed by canonical unit identity. Build one per computation.
#[derive(Clone, Debug, Default)]
pub struct UnitLedger {
    units: BTreeMap<UnitKey, UnitAccumulator>,
}

impl UnitLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from a set of matches.
    pub fn from_matches<'a>(matches: impl IntoIterator<Item = &'a MatchRecord>) -> Self {
        let mut ledger = Self::new();
        for record in matches {
            ledger.record_match(record);
        }
        ledger
    }

    /// Segment one match and fold it into the ledger.
    pub fn record_match(&mut self, record: &MatchRecord) {
        let segments = reconstruct_segments(record);
        self.attribute(record, &segments);
    }

    /// Credit a match's time, possession and events to the units of its segments.
    pub fn attribute(&mut self, record: &MatchRecord, segments: &[Segment]) {
        if segments.is_empty() {
            return;
        }
        let (with_ball, without_ball) = record.possession_totals();
        for segment in segments {
            self.units
                .entry(segment.unit.clone())
                .or_default()
                .add_segment(segment, with_ball, without_ball);
        }

        for event in &record.event_log {
            let t = event.absolute_seconds();
            let Some(segment) = segment_at(segments, t) else {
                log::debug!("Match {}: no segment at {}s, event dropped", record.id, t);
                continue;
            };
            self.units
                .entry(segment.unit.clone())
                .or_default()
                .add_event(&segment.unit, event);
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, unit: &UnitKey) -> Option<&UnitAccumulator> {
        self.units.get(unit)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UnitKey, &UnitAccumulator)> {
        self.units.iter()
    }

    /// Units with at least `min_on_court_seconds` of combined time, in key order.
    pub fn into_qualified(self, min_on_court_seconds: u32) -> Vec<(UnitKey, UnitAccumulator)> {
        self.units
            .into_iter()
            .filter(|(_, acc)| acc.total_on_court_seconds >= min_on_court_seconds)
            .collect()
    }
}
