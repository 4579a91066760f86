//! Roster directory: player id to display name and photo. Presentation only.

use crate::models::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

/// Display name used when a player id is not in the roster.
pub const UNKNOWN_PLAYER_NAME: &str = "Unknown player";

/// One roster row.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

impl RosterEntry {
    pub fn new(player_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            name: name.into(),
            nickname: None,
            photo: None,
        }
    }

    /// Nickname when present and non-blank, otherwise the name.
    pub fn display_name(&self) -> &str {
        match self.nickname.as_deref().map(str::trim) {
            Some(nick) if !nick.is_empty() => nick,
            _ => self.name.trim(),
        }
    }
}

/// A unit member resolved for display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct UnitMember {
    pub player_id: String,
    pub display_name: String,
    /// Empty when the roster has no photo for this player.
    pub photo: String,
}

/// Lookup table of roster entries keyed by trimmed player id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<RosterEntry>", into = "Vec<RosterEntry>")]
pub struct Roster {
    entries: HashMap<String, RosterEntry>,
}

impl From<Vec<RosterEntry>> for Roster {
    fn from(entries: Vec<RosterEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<&[RosterEntry]> for Roster {
    fn from(entries: &[RosterEntry]) -> Self {
        Self::from_entries(entries.iter().cloned())
    }
}

impl From<Roster> for Vec<RosterEntry> {
    fn from(roster: Roster) -> Self {
        let mut entries: Vec<RosterEntry> = roster.entries.into_values().collect();
        entries.sort_by(|a, b| a.player_id.cmp(&b.player_id));
        entries
    }
}

impl Roster {
    /// Later entries with the same id replace earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = RosterEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| (e.player_id.trim().to_string(), e))
            .collect();
        Self { entries }
    }

    /// Read a `player_id,name,nickname,photo` CSV with a header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, AnalysisError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut entries = Vec::new();
        for row in rdr.deserialize::<RosterEntry>() {
            entries.push(row.map_err(|e| AnalysisError::RosterCsv(e.to_string()))?);
        }
        Ok(Self::from_entries(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, player_id: &str) -> Option<&RosterEntry> {
        self.entries.get(player_id.trim())
    }

    /// Resolve a player for display. Unknown ids get a placeholder name and no photo.
    pub fn member(&self, player_id: &str) -> UnitMember {
        match self.get(player_id) {
            Some(entry) => UnitMember {
                player_id: player_id.to_string(),
                display_name: entry.display_name().to_string(),
                photo: entry.photo.clone().unwrap_or_default(),
            },
            None => UnitMember {
                player_id: player_id.to_string(),
                display_name: UNKNOWN_PLAYER_NAME.to_string(),
                photo: String::new(),
            },
        }
    }
}
