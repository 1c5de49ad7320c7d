use serde::Serialize;

use super::common::MatchType;

/// Final state of a completed match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum MatchStatus {
    /// Full time.
    #[default]
    #[serde(rename = "FT")]
    #[strum(serialize = "FT")]
    FullTime,
}

/// A completed match with its final score, recovered from a results listing row.
///
/// Scores are whatever digit run the page shows; no upper bound is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub date: String,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    pub home: String,
    pub away: String,
    pub home_score: u64,
    pub away_score: u64,
    pub venue: String,
    pub ko: String,
    pub notes: String,
    pub status: MatchStatus,
}
