//! Unit identity and match segments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of non-goalkeeper players on court.
pub const UNIT_SIZE: usize = 4;

/// Order-independent identity of a unit: the four trimmed member ids, sorted.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct UnitKey([String; UNIT_SIZE]);

impl UnitKey {
    /// Build a key from four player ids in any order.
    pub fn new<S: AsRef<str>>(players: &[S; UNIT_SIZE]) -> Self {
        let mut ids: [String; UNIT_SIZE] =
            std::array::from_fn(|i| players[i].as_ref().trim().to_string());
        ids.sort();
        Self(ids)
    }

    pub fn players(&self) -> &[String; UNIT_SIZE] {
        &self.0
    }

    /// True if the (trimmed) player id is one of the four members.
    pub fn contains(&self, player_id: &str) -> bool {
        let player_id = player_id.trim();
        self.0.iter().any(|p| p == player_id)
    }
}

impl fmt::Display for UnitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

/// Half-open interval `[start_seconds, end_seconds)` of one match with a single unit on court.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start_seconds: u32,
    pub end_seconds: u32,
    pub unit: UnitKey,
}

impl Segment {
    pub fn duration_seconds(&self) -> u32 {
        self.end_seconds - self.start_seconds
    }

    pub fn contains(&self, absolute_seconds: u32) -> bool {
        self.start_seconds <= absolute_seconds && absolute_seconds < self.end_seconds
    }

    /// This segment's share of a whole-match quantity, proportional to duration.
    pub fn share_of(&self, match_total: f64) -> f64 {
        match_total * f64::from(self.duration_seconds())
            / f64::from(crate::models::MATCH_LENGTH_SECONDS)
    }
}
