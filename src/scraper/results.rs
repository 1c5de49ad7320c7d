use itertools::Itertools;

use crate::model::{MatchStatus, MatchType, ResultRecord, Row};
use crate::scraper::classify::RowClass;

const MIN_CELLS: usize = 4;

/// Extract every score-bearing row. Rows that do not qualify are dropped.
pub fn extract_results<I>(rows: I) -> Vec<ResultRecord>
where
    I: IntoIterator<Item = Row>,
{
    rows.into_iter()
        .filter_map(|row| match classify_result(&row) {
            RowClass::Result(result) => Some(result),
            _ => None,
        })
        .collect()
}

/// Classify a single row as a result or [`RowClass::Unrecognized`].
pub fn classify_result(row: &[String]) -> RowClass {
    parse_result_row(row).map_or(RowClass::Unrecognized, RowClass::Result)
}

/// First cell holding both a hyphen and a digit, e.g. `"Rovers 2 - 1 Town"`.
fn score_cell(row: &[String]) -> Option<&str> {
    row.iter()
        .find(|cell| cell.contains('-') && cell.chars().any(|c| c.is_ascii_digit()))
        .map(String::as_str)
}

fn parse_result_row(row: &[String]) -> Option<ResultRecord> {
    if row.len() < MIN_CELLS {
        return None;
    }
    let score = score_cell(row)?;
    let text = row.join(" | ").to_lowercase();
    if !text.contains("vs") && !score.contains(" - ") {
        return None;
    }

    let (left, right) = score.split('-').collect_tuple()?;
    let (home, home_score) = take_score(left, Side::Home)?;
    let (away, away_score) = take_score(right, Side::Away)?;

    let date = row[0].clone();
    if date.is_empty() || home.is_empty() || away.is_empty() {
        return None;
    }

    Some(ResultRecord {
        date,
        match_type: MatchType::League,
        home,
        away,
        home_score,
        away_score,
        venue: String::new(),
        ko: String::new(),
        notes: String::new(),
        status: MatchStatus::FullTime,
    })
}

#[derive(Clone, Copy)]
enum Side {
    Home,
    Away,
}

/// Pull the score out of one half of the score cell and return the team name
/// that is left over.
///
/// The home score is the last number before the hyphen; the away score is
/// the first number after it.
fn take_score(part: &str, side: Side) -> Option<(String, u64)> {
    let tokens = part.split_whitespace().collect_vec();
    let is_number = |token: &&str| token.chars().all(|c| c.is_ascii_digit());
    let index = match side {
        Side::Home => tokens.iter().rposition(|t| is_number(t))?,
        Side::Away => tokens.iter().position(|t| is_number(t))?,
    };
    let score = tokens[index].parse().ok()?;
    let name = tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, token)| token)
        .join(" ");
    Some((name, score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_score_row() {
        let results = extract_results([row(&["12 Oct", "", "Rovers 2 - 1 Town", ""])]);
        assert_eq!(
            results,
            vec![ResultRecord {
                date: "12 Oct".into(),
                match_type: MatchType::League,
                home: "Rovers".into(),
                away: "Town".into(),
                home_score: 2,
                away_score: 1,
                venue: String::new(),
                ko: String::new(),
                notes: String::new(),
                status: MatchStatus::FullTime,
            }]
        );
    }

    #[test]
    fn test_digits_in_team_names() {
        let results = extract_results([row(&["12 Oct", "10:00", "Syston U12 10 - 0 Anstey U12", "Final"])]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].home, "Syston U12");
        assert_eq!(results[0].away, "Anstey U12");
        assert_eq!((results[0].home_score, results[0].away_score), (10, 0));
    }

    #[test]
    fn test_score_digit_inside_team_name() {
        // Only the score token goes; the "1" in "U11" stays.
        let results = extract_results([row(&["12 Oct", "", "Syston U11 1 - 0 Anstey", ""])]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].home, "Syston U11");
        assert_eq!(results[0].away, "Anstey");
        assert_eq!((results[0].home_score, results[0].away_score), (1, 0));
    }

    #[test]
    fn test_large_scores_kept() {
        let results = extract_results([row(&["12 Oct", "", "Rovers 99999999999 - 1 Town", ""])]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].home_score, 99_999_999_999);
        assert_eq!(results[0].home, "Rovers");
    }

    #[test]
    fn test_tight_hyphen_needs_vs() {
        let tight = row(&["12 Oct", "", "Rovers 2-1 Town", ""]);
        assert!(extract_results([tight]).is_empty());

        let with_vs = row(&["12 Oct", "Rovers vs Town", "Rovers 2-1 Town", ""]);
        let results = extract_results([with_vs]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].home, "Rovers");
        assert_eq!(results[0].away, "Town");
    }

    #[test]
    fn test_no_digits_is_not_a_score() {
        let results = extract_results([row(&["12 Oct", "", "Rovers - Town", "vs"])]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_extra_hyphens_dropped() {
        let results = extract_results([row(&["12 Oct", "", "Rovers-Athletic 2 - 1 Town", ""])]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_first_score_cell_wins() {
        // A hyphenated date is picked as the score cell and splits into three parts.
        let results = extract_results([row(&["12-10-2024", "", "Rovers 2 - 1 Town", ""])]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_missing_away_score() {
        let results = extract_results([row(&["12 Oct", "", "Rovers 2 - P Town", ""])]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_missing_team_name() {
        let results = extract_results([row(&["12 Oct", "", "2 - 1 Town", ""])]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_short_rows_dropped() {
        let results = extract_results([row(&["12 Oct", "Rovers 2 - 1 Town", "vs"])]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let rows = vec![
            row(&["12 Oct", "", "Rovers 2 - 1 Town", ""]),
            row(&["13 Oct", "", "Ath 0 - 0 Utd", "HT"]),
        ];
        let first = serde_json::to_string(&extract_results(rows.clone())).unwrap();
        let second = serde_json::to_string(&extract_results(rows)).unwrap();
        assert_eq!(first, second);
        assert!(first.contains(r#""homeScore":2,"awayScore":1"#));
    }
}
