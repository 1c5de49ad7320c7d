use crate::model::{FixtureRecord, ResultRecord};
use crate::scraper::fixtures::classify_fixture;
use crate::scraper::results::classify_result;

/// What a single row turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowClass {
    Fixture(FixtureRecord),
    Result(ResultRecord),
    Unrecognized,
}

impl RowClass {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, RowClass::Unrecognized)
    }
}

/// Classifiers in the order they are tried. A score is the stronger signal,
/// so result rows are checked before fixture rows.
const CLASSIFIERS: [fn(&[String]) -> RowClass; 2] = [classify_result, classify_fixture];

/// Classify a row of unknown origin.
///
/// The per-page extractors only ever ask for their own kind; this is for
/// callers holding rows from a page whose type is not known up front.
pub fn classify(row: &[String]) -> RowClass {
    CLASSIFIERS
        .iter()
        .map(|classifier| classifier(row))
        .find(RowClass::is_recognized)
        .unwrap_or(RowClass::Unrecognized)
}
