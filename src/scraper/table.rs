use ::scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::model::LeagueTable;
use crate::scraper::collapsed_text;
use crate::scraper::rows::RowTokenizer;

/// Standings rows have at least position, team and a handful of counts.
const MIN_STAT_CELLS: usize = 6;
/// Column headings every standings table carries. Matched as plain
/// substrings, so `p` is satisfied by "Pos" or "Pts" as well.
const STAT_HEADINGS: [&str; 4] = ["p", "w", "d", "l"];
const GOAL_HEADINGS: [&str; 2] = ["gd", "goal"];

/// Find the first standings-like table in `document` and return its data rows.
///
/// Returns an empty table when nothing on the page looks like standings.
pub fn extract_table(document: &Html) -> Result<LeagueTable> {
    let table_selector = Selector::parse("table")?;
    let head_selector = Selector::parse("thead")?;

    let Some(table) = document
        .select(&table_selector)
        .find(|table| is_standings(table, &head_selector))
    else {
        return Ok(LeagueTable::new());
    };

    let tokenizer = RowTokenizer::new()?;
    Ok(tokenizer
        .rows_in(table)
        .filter(|row| row.len() >= MIN_STAT_CELLS)
        .collect())
}

fn is_standings(table: &ElementRef, head_selector: &Selector) -> bool {
    let heading = header_text(table, head_selector);
    STAT_HEADINGS.iter().all(|h| heading.contains(h))
        && GOAL_HEADINGS.iter().any(|h| heading.contains(h))
}

/// Lowercase text of the table's `<thead>`, or of the whole table without one.
fn header_text(table: &ElementRef, head_selector: &Selector) -> String {
    let scope = table.select(head_selector).next().unwrap_or(*table);
    collapsed_text(&scope).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STANDINGS_PAGE: &str = r#"
        <html><body>
        <table class="nav"><tr><td>Home</td><td>Fixtures</td><td>Results</td></tr></table>
        <table class="cell-dividers">
          <thead><tr><th>Pos</th><th>Team</th><th>P</th><th>W</th><th>D</th><th>L</th>
                     <th>GF</th><th>GA</th><th>GD</th><th>Pts</th></tr></thead>
          <tbody>
            <tr><td>1</td><td>Syston Town U12</td><td>8</td><td>7</td><td>1</td><td>0</td>
                <td>31</td><td>6</td><td>25</td><td>22</td></tr>
            <tr><td>2</td><td>Anstey Nomads U12</td><td>8</td><td>5</td><td>2</td><td>1</td>
                <td>19</td><td>9</td><td>10</td><td>17</td></tr>
            <tr><td colspan="10">Points deducted: none</td></tr>
          </tbody>
        </table>
        </body></html>"#;

    #[test]
    fn test_selects_standings_table() {
        let document = Html::parse_document(STANDINGS_PAGE);
        let table = extract_table(&document).unwrap();
        assert_eq!(
            table,
            vec![
                vec!["1", "Syston Town U12", "8", "7", "1", "0", "31", "6", "25", "22"],
                vec!["2", "Anstey Nomads U12", "8", "5", "2", "1", "19", "9", "10", "17"],
            ]
        );
    }

    #[test]
    fn test_no_standings_table() {
        let document = Html::parse_document(
            "<table><tr><td>1</td><td>2</td><td>3</td><td>4</td><td>5</td><td>6</td></tr></table>",
        );
        assert!(extract_table(&document).unwrap().is_empty());
    }

    #[test]
    fn test_whole_table_text_without_thead() {
        let document = Html::parse_document(
            "<table>\
               <tr><td>Pos</td><td>Team</td><td>Pld</td><td>W</td><td>D</td><td>L</td><td>Goal Diff</td></tr>\
               <tr><td>1</td><td>Rovers</td><td>3</td><td>3</td><td>0</td><td>0</td><td>+9</td></tr>\
             </table>",
        );
        let table = extract_table(&document).unwrap();
        // Without a thead the heading row is just another row with enough cells.
        assert_eq!(table.len(), 2);
        assert_eq!(table[1][1], "Rovers");
    }

    #[test]
    fn test_thead_decides_over_body() {
        // The body mentions every keyword but the heading does not.
        let document = Html::parse_document(
            "<table><thead><tr><th>Date</th><th>Fixture</th></tr></thead>\
               <tbody><tr><td>p</td><td>w</td><td>d</td><td>l</td><td>gd</td><td>x</td></tr></tbody>\
             </table>",
        );
        assert!(extract_table(&document).unwrap().is_empty());
    }

    #[test]
    fn test_first_matching_table_wins() {
        let document = Html::parse_document(
            "<table><thead><tr><th>P W D L GD</th></tr></thead>\
               <tr><td>a</td><td>b</td><td>c</td><td>d</td><td>e</td><td>f</td></tr></table>\
             <table><thead><tr><th>P W D L GD</th></tr></thead>\
               <tr><td>g</td><td>h</td><td>i</td><td>j</td><td>k</td><td>l</td></tr></table>",
        );
        let table = extract_table(&document).unwrap();
        assert_eq!(table, vec![vec!["a", "b", "c", "d", "e", "f"]]);
    }
}
