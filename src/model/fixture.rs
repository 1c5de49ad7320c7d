use serde::Serialize;

use super::common::{Confidence, MatchType};

/// A scheduled match recovered from a fixtures listing row.
///
/// Every field is a best-effort string; an empty string means the value
/// could not be determined. `date`, `home` and `away` are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureRecord {
    pub date: String,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    pub home: String,
    pub away: String,
    pub venue: String,
    pub ko: String,
    /// Not part of the emitted JSON.
    #[serde(skip)]
    pub confidence: Confidence,
}
