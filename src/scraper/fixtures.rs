use itertools::Itertools;

use crate::model::{Confidence, FixtureRecord, MatchType, Row};
use crate::scraper::classify::RowClass;

/// Fixture rows carry at least date, kickoff/teams and venue cells.
const MIN_CELLS: usize = 4;
/// One of these must appear somewhere in a row before it counts as a fixture.
const FIXTURE_MARKERS: [&str; 3] = ["venue", "ground", "park"];
/// Words that identify the venue cell itself.
const VENUE_MARKERS: [&str; 5] = ["venue", "park", "ground", "school", "field"];
const TEAM_SEPARATOR: &str = " vs ";
/// Team names are cut down to this many words on each side of the separator.
const TEAM_NAME_TOKENS: usize = 3;

/// Extract every fixture-like row. Rows that do not qualify are dropped.
pub fn extract_fixtures<I>(rows: I) -> Vec<FixtureRecord>
where
    I: IntoIterator<Item = Row>,
{
    rows.into_iter()
        .filter_map(|row| match classify_fixture(&row) {
            RowClass::Fixture(fixture) => Some(fixture),
            _ => None,
        })
        .collect()
}

/// Classify a single row as a fixture or [`RowClass::Unrecognized`].
pub fn classify_fixture(row: &[String]) -> RowClass {
    parse_fixture_row(row).map_or(RowClass::Unrecognized, RowClass::Fixture)
}

/// A row is a candidate when it names both sides of a match and a venue.
pub(crate) fn is_fixture_candidate(row: &[String]) -> bool {
    if row.len() < MIN_CELLS {
        return false;
    }
    let text = row.join(" | ").to_lowercase();
    let has_separator = text.contains("vs") || text.split_whitespace().any(|token| token == "v");
    has_separator && FIXTURE_MARKERS.iter().any(|marker| text.contains(marker))
}

fn parse_fixture_row(row: &[String]) -> Option<FixtureRecord> {
    if !is_fixture_candidate(row) {
        return None;
    }

    let date = row[0].clone();
    let (home, away, confidence) = match split_teams(row) {
        Some((home, away)) => (home, away, Confidence::Content),
        None => {
            let (home, away) = positional_teams(row)?;
            (home, away, Confidence::Positional)
        }
    };
    if date.is_empty() || home.is_empty() || away.is_empty() {
        return None;
    }

    Some(FixtureRecord {
        date,
        match_type: MatchType::League,
        home,
        away,
        venue: venue(row),
        ko: kickoff(row),
        confidence,
    })
}

/// Kickoff is whichever of the second or third cell looks like `HH:MM`.
fn kickoff(row: &[String]) -> String {
    row.iter()
        .skip(1)
        .take(2)
        .find(|cell| cell.contains(':'))
        .cloned()
        .unwrap_or_default()
}

/// Split the whole row text around its first ` vs `.
///
/// The left side usually still carries the date and kickoff, so tokens with a
/// colon are dropped and only the last few words are kept. Names longer than
/// [`TEAM_NAME_TOKENS`] words get truncated.
fn split_teams(row: &[String]) -> Option<(String, String)> {
    let joined = row.join(" ");
    let (left, right) = joined.split_once(TEAM_SEPARATOR)?;

    let left = left
        .split_whitespace()
        .filter(|token| !token.contains(':'))
        .collect_vec();
    let home = left[left.len().saturating_sub(TEAM_NAME_TOKENS)..].join(" ");
    let away = right.split_whitespace().take(TEAM_NAME_TOKENS).join(" ");
    Some((home, away))
}

/// Lower-confidence guess used when the row has no ` vs ` separator.
fn positional_teams(row: &[String]) -> Option<(String, String)> {
    Some((row.get(2)?.clone(), row.get(3)?.clone()))
}

/// The last cell mentioning a venue-like word.
fn venue(row: &[String]) -> String {
    row.iter()
        .rev()
        .find(|cell| {
            let cell = cell.to_lowercase();
            VENUE_MARKERS.iter().any(|marker| cell.contains(marker))
        })
        .cloned()
        .unwrap_or_default()
}
