use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

use crate::client::FullTimeClient;
use crate::config::Config;
use crate::error::Result;
use crate::sink::JsonSink;
use crate::source::DataSource;

/// Record counts written by one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub fixtures: usize,
    pub results: usize,
    pub table_rows: usize,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} fixtures, {} results, {} table rows",
            self.fixtures, self.results, self.table_rows
        )
    }
}

/// Scrape all three pages and write them through `sink`, one page at a time.
///
/// A page that cannot be fetched or parsed is logged and written out as an
/// empty array; the other pages are unaffected. Only failures to write the
/// output are returned as errors.
#[instrument(skip_all)]
pub async fn run(client: &FullTimeClient, config: &Config, sink: &JsonSink) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    for source in DataSource::iter() {
        let lrcode = config.lrcode(source);
        match source {
            DataSource::Fixtures => {
                let fixtures = or_empty(source, client.get_fixtures(lrcode).await);
                sink.write(source, &fixtures)?;
                summary.fixtures = fixtures.len();
            }
            DataSource::Results => {
                let results = or_empty(source, client.get_results(lrcode).await);
                sink.write(source, &results)?;
                summary.results = results.len();
            }
            DataSource::Table => {
                let table = or_empty(source, client.get_table(lrcode).await);
                sink.write(source, &table)?;
                summary.table_rows = table.len();
            }
        }
    }

    info!(
        fixtures = summary.fixtures,
        results = summary.results,
        table_rows = summary.table_rows,
        dir = %sink.dir().display(),
        "run complete"
    );
    Ok(summary)
}

fn or_empty<T>(source: DataSource, outcome: Result<Vec<T>>) -> Vec<T> {
    outcome.unwrap_or_else(|err| {
        warn!(%source, error = %err, "{source} fetch/parse failed, writing empty output");
        Vec::new()
    })
}
