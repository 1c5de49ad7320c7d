//! The extraction engine: row tokenizing and the three best-effort extractors.
//!
//! None of these functions fail on odd markup. Rows that do not look like
//! what an extractor wants are dropped, so an unfamiliar page layout yields
//! fewer (or zero) records rather than an error.

pub mod classify;
pub mod fixtures;
pub mod results;
pub mod rows;
pub mod table;

pub use ::scraper::Html;
use ::scraper::ElementRef;
use itertools::Itertools;
use tracing::debug;

use crate::error::Result;
use crate::model::{FixtureRecord, LeagueTable, ResultRecord};

pub use classify::{classify, RowClass};
pub use fixtures::extract_fixtures;
pub use results::extract_results;
pub use rows::RowTokenizer;
pub use table::extract_table;

/// Parse a raw page body. html5ever recovers from malformed markup, so this never fails.
pub fn parse_document(body: &str) -> Html {
    Html::parse_document(body)
}

/// Extract fixtures from a fixtures listing page.
pub fn parse_fixtures(body: &str) -> Result<Vec<FixtureRecord>> {
    let document = parse_document(body);
    let tokenizer = RowTokenizer::new()?;
    let fixtures = extract_fixtures(tokenizer.rows(&document));
    debug!(count = fixtures.len(), "parsed fixtures page");
    Ok(fixtures)
}

/// Extract results from a results listing page.
pub fn parse_results(body: &str) -> Result<Vec<ResultRecord>> {
    let document = parse_document(body);
    let tokenizer = RowTokenizer::new()?;
    let results = extract_results(tokenizer.rows(&document));
    debug!(count = results.len(), "parsed results page");
    Ok(results)
}

/// Extract the standings rows from a league table page.
pub fn parse_table(body: &str) -> Result<LeagueTable> {
    let document = parse_document(body);
    let table = extract_table(&document)?;
    debug!(count = table.len(), "parsed table page");
    Ok(table)
}

/// All text inside `element`, tags stripped, whitespace runs collapsed to one
/// space and the ends trimmed.
pub(crate) fn collapsed_text(element: &ElementRef) -> String {
    element.text().flat_map(str::split_whitespace).join(" ")
}
