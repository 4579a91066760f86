//! Match records: starting lineup, substitutions, event log and possession totals.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Unique identifier for a match record.
pub type MatchId = Uuid;

/// Length of one playing period in seconds (20 minutes).
pub const HALF_LENGTH_SECONDS: u32 = 1200;

/// Length of a full match in seconds (two periods).
pub const MATCH_LENGTH_SECONDS: u32 = 2 * HALF_LENGTH_SECONDS;

/// Playing period an offset is measured in.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    FirstHalf,
    SecondHalf,
}

impl Period {
    /// Absolute match-clock seconds for an offset within this period.
    pub fn absolute_seconds(self, offset_seconds: u32) -> u32 {
        match self {
            Period::FirstHalf => offset_seconds,
            Period::SecondHalf => HALF_LENGTH_SECONDS.saturating_add(offset_seconds),
        }
    }
}

/// One substitution: `player_out_id` leaves the court, `player_in_id` enters.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    pub period: Period,
    #[serde(deserialize_with = "deserialize_clock")]
    pub time_offset_seconds: u32,
    pub player_out_id: String,
    pub player_in_id: String,
}

impl Substitution {
    pub fn absolute_seconds(&self) -> u32 {
        self.period.absolute_seconds(self.time_offset_seconds)
    }
}

/// Kind of action recorded in the post-match event log.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Goal,
    PassCorrect,
    PassWrong,
    ShotOnTarget,
    ShotOffTarget,
    TackleWithPossession,
    TackleWithoutPossession,
    TackleCounterAttack,
    Foul,
}

/// Whether a foul was committed by our player or received by our team.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoulSide {
    Committed,
    Received,
}

/// A single entry of the event log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub period: Period,
    #[serde(deserialize_with = "deserialize_clock")]
    pub time_offset_seconds: u32,
    #[serde(default)]
    pub player_id: String,
    pub action_kind: ActionKind,
    /// True for goals scored by the opponent.
    #[serde(default)]
    pub is_opponent_event: bool,
    /// How a goal was scored (e.g. "set piece", "counter").
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub foul_side: Option<FoulSide>,
}

impl MatchEvent {
    pub fn new(
        period: Period,
        time_offset_seconds: u32,
        player_id: impl Into<String>,
        action_kind: ActionKind,
    ) -> Self {
        Self {
            period,
            time_offset_seconds,
            player_id: player_id.into(),
            action_kind,
            is_opponent_event: false,
            method: None,
            foul_side: None,
        }
    }

    pub fn absolute_seconds(&self) -> u32 {
        self.period.absolute_seconds(self.time_offset_seconds)
    }
}

/// One played match as entered by the user. Read-only input to the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: MatchId,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub opponent: Option<String>,
    /// Goalkeeper first, then the on-court players.
    pub starting_lineup: Vec<String>,
    #[serde(default)]
    pub substitution_events: Vec<Substitution>,
    #[serde(default)]
    pub event_log: Vec<MatchEvent>,
    #[serde(default)]
    pub possession_seconds_with_ball: Option<f64>,
    #[serde(default)]
    pub possession_seconds_without_ball: Option<f64>,
}

impl MatchRecord {
    /// A match with only a starting lineup; everything else empty.
    pub fn new<S: Into<String>>(starting_lineup: impl IntoIterator<Item = S>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: None,
            competition: None,
            opponent: None,
            starting_lineup: starting_lineup.into_iter().map(Into::into).collect(),
            substitution_events: Vec::new(),
            event_log: Vec::new(),
            possession_seconds_with_ball: None,
            possession_seconds_without_ball: None,
        }
    }

    /// Possession totals, absent values read as zero.
    pub fn possession_totals(&self) -> (f64, f64) {
        (
            self.possession_seconds_with_ball.unwrap_or(0.0),
            self.possession_seconds_without_ball.unwrap_or(0.0),
        )
    }
}

/// Parse a match clock: `"MM:SS"` or a plain number of seconds.
pub fn parse_clock(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    match raw.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes: u32 = minutes.trim().parse().ok()?;
            let seconds: u32 = seconds.trim().parse().ok()?;
            if seconds >= 60 {
                return None;
            }
            minutes.checked_mul(60)?.checked_add(seconds)
        }
        None => raw.parse().ok(),
    }
}

fn deserialize_clock<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Clock {
        Seconds(u32),
        Text(String),
    }

    match Clock::deserialize(deserializer)? {
        Clock::Seconds(s) => Ok(s),
        Clock::Text(text) => parse_clock(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid match clock {:?}", text))),
    }
}
