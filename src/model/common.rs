use serde::Serialize;

/// The cell texts of a single `<tr>`, in document order.
pub type Row = Vec<String>;

/// Competition label attached to every record.
///
/// Only league pages are scraped, so this is always [`MatchType::League`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum MatchType {
    #[default]
    League,
}

/// How a record's team names were recovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Confidence {
    /// Teams came from splitting the row text around its `vs` separator.
    #[default]
    Content,
    /// Teams were guessed from fixed cell positions.
    Positional,
}
