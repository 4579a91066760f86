//! Lineup unit analysis: library with models and the ranking engine.
//!
//! Reconstructs which four outfield players were on court throughout each match, attributes
//! match events to those units and ranks units by normalized performance indices.

pub mod api;
pub mod logic;
pub mod models;

pub use logic::{
    compute_unit_rankings, compute_unit_rankings_with, filter_matches, normalize, rank_ledger,
    rank_units, reconstruct_segments, segment_at, MethodTally, RawIndices, UnitAccumulator,
    UnitLedger, UNKNOWN_METHOD,
};
pub use models::{
    parse_clock, ActionKind, AnalysisConfig, AnalysisError, Dataset, DatasetId, FoulSide,
    MatchEvent, MatchFilter, MatchId, MatchRecord, PerMinuteStats, Period, RankingEntry, Roster,
    RosterEntry, ScoreWeights, Segment, Substitution, UnitKey, UnitMember, UnitRankings,
    HALF_LENGTH_SECONDS, MATCH_LENGTH_SECONDS, UNIT_SIZE, UNKNOWN_PLAYER_NAME,
};
