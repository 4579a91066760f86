//! Errors raised at the engine boundary.

use crate::models::match_record::MatchId;

/// Errors that can occur when configuring or feeding an analysis.
///
/// Bad match data is never an error; it is skipped during the computation.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisError {
    /// Configuration violates a precondition of the computation.
    InvalidConfig(String),
    /// No match with this id in the dataset.
    MatchNotFound(MatchId),
    /// A match with this id is already in the dataset.
    DuplicateMatch(MatchId),
    /// The roster CSV could not be read.
    RosterCsv(String),
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::InvalidConfig(reason) => {
                write!(f, "Invalid analysis config: {}", reason)
            }
            AnalysisError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            AnalysisError::DuplicateMatch(id) => write!(f, "Match {} already exists", id),
            AnalysisError::RosterCsv(reason) => write!(f, "Could not read roster CSV: {}", reason),
        }
    }
}

impl std::error::Error for AnalysisError {}
