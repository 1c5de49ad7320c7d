use crate::error::{FullTimeError, Result};
use crate::source::DataSource;

pub const FIXTURES_LRCODE_VAR: &str = "FA_FIXTURES_LRCODE";
pub const RESULTS_LRCODE_VAR: &str = "FA_RESULTS_LRCODE";
pub const TABLE_LRCODE_VAR: &str = "FA_TABLE_LRCODE";

/// League identifiers (`lrcode`s) for each scraped page.
///
/// The three may differ, e.g. when a club's fixtures and table live in
/// different divisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub fixtures_lrcode: String,
    pub results_lrcode: String,
    pub table_lrcode: String,
}

impl Config {
    /// Read the identifiers from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the identifiers through `lookup`. Values are trimmed and blank
    /// values count as unset. Every unset variable is named in the error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let fixtures = read(FIXTURES_LRCODE_VAR);
        let results = read(RESULTS_LRCODE_VAR);
        let table = read(TABLE_LRCODE_VAR);

        match (fixtures, results, table) {
            (Some(fixtures_lrcode), Some(results_lrcode), Some(table_lrcode)) => Ok(Self {
                fixtures_lrcode,
                results_lrcode,
                table_lrcode,
            }),
            (fixtures, results, table) => {
                let vars = [
                    (FIXTURES_LRCODE_VAR, fixtures.is_none()),
                    (RESULTS_LRCODE_VAR, results.is_none()),
                    (TABLE_LRCODE_VAR, table.is_none()),
                ]
                .into_iter()
                .filter_map(|(var, missing)| missing.then_some(var))
                .collect();
                Err(FullTimeError::MissingConfig { vars })
            }
        }
    }

    pub fn lrcode(&self, source: DataSource) -> &str {
        match source {
            DataSource::Fixtures => &self.fixtures_lrcode,
            DataSource::Results => &self.results_lrcode,
            DataSource::Table => &self.table_lrcode,
        }
    }
}
