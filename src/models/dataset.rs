//! Dataset: a client's match records and roster, kept between ranking requests.

use crate::models::error::AnalysisError;
use crate::models::match_record::{MatchId, MatchRecord};
use crate::models::roster::Roster;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a dataset.
pub type DatasetId = Uuid;

/// Inputs only. Rankings are derived from scratch on every request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: DatasetId,
    pub matches: Vec<MatchRecord>,
    pub roster: Roster,
}

impl Dataset {
    /// Create an empty dataset with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            matches: Vec::new(),
            roster: Roster::default(),
        }
    }

    /// Add a match. Ids are unique within a dataset.
    pub fn add_match(&mut self, record: MatchRecord) -> Result<(), AnalysisError> {
        if self.matches.iter().any(|m| m.id == record.id) {
            return Err(AnalysisError::DuplicateMatch(record.id));
        }
        self.matches.push(record);
        Ok(())
    }

    /// Remove a match by id.
    pub fn remove_match(&mut self, match_id: MatchId) -> Result<MatchRecord, AnalysisError> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.id == match_id)
            .ok_or(AnalysisError::MatchNotFound(match_id))?;
        Ok(self.matches.remove(idx))
    }

    pub fn set_roster(&mut self, roster: Roster) {
        self.roster = roster;
    }
}
