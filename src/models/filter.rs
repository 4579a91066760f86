//! Match filter: selects the set of matches an analysis runs over.

use crate::models::match_record::MatchRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// All criteria are optional; an empty filter accepts every match.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchFilter {
    /// Inclusive lower date bound. Matches without a date are excluded when set.
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound. Matches without a date are excluded when set.
    pub to: Option<NaiveDate>,
    /// Case-insensitive competition name.
    pub competition: Option<String>,
    /// Case-insensitive opponent name.
    pub opponent: Option<String>,
}

impl MatchFilter {
    pub fn is_empty(&self) -> bool {
        self.from.is_none()
            && self.to.is_none()
            && self.competition.is_none()
            && self.opponent.is_none()
    }

    pub fn accepts(&self, record: &MatchRecord) -> bool {
        if self.from.is_some() || self.to.is_some() {
            let Some(date) = record.date else {
                return false;
            };
            if self.from.is_some_and(|from| date < from) || self.to.is_some_and(|to| date > to) {
                return false;
            }
        }
        text_matches(self.competition.as_deref(), record.competition.as_deref())
            && text_matches(self.opponent.as_deref(), record.opponent.as_deref())
    }
}

fn text_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted.map(str::trim) {
        None | Some("") => true,
        Some(wanted) => actual.is_some_and(|a| a.trim().eq_ignore_ascii_case(wanted)),
    }
}
