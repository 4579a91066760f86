//! Data structures for the unit analysis: matches, roster, segments, rankings.

mod config;
mod dataset;
mod error;
mod filter;
mod match_record;
mod ranking;
mod roster;
mod unit;

pub use config::{AnalysisConfig, ScoreWeights};
pub use dataset::{Dataset, DatasetId};
pub use error::AnalysisError;
pub use filter::MatchFilter;
pub use match_record::{
    parse_clock, ActionKind, FoulSide, MatchEvent, MatchId, MatchRecord, Period, Substitution,
    HALF_LENGTH_SECONDS, MATCH_LENGTH_SECONDS,
};
pub use ranking::{PerMinuteStats, RankingEntry, UnitRankings};
pub use roster::{Roster, RosterEntry, UnitMember, UNKNOWN_PLAYER_NAME};
pub use unit::{Segment, UnitKey, UNIT_SIZE};
