use std::time::Duration;

use reqwest::StatusCode;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

use crate::error::{FullTimeError, Result};
use crate::model::{FixtureRecord, LeagueTable, ResultRecord};
use crate::retry::RetryPolicy;
use crate::scraper;
use crate::source::{DataSource, BASE_URL};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; SystonBot/1.0)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// The main entry point for fetching league pages from FA Full-Time.
///
/// `FullTimeClient` wraps a [`reqwest::Client`], retries failed fetches
/// according to its [`RetryPolicy`] and runs the matching extractor on each
/// page.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> fulltime_scraper::Result<()> {
/// use fulltime_scraper::FullTimeClient;
///
/// let client = FullTimeClient::new()?;
/// let fixtures = client.get_fixtures("123456789").await?;
/// println!("Found {} fixtures", fixtures.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FullTimeClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl FullTimeClient {
    /// Create a client with a browser-like user agent and a 20 second
    /// per-attempt timeout.
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FullTimeError::ClientBuild)?;
        Ok(Self::with_client(http))
    }

    /// Create a client using the provided [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            base_url: BASE_URL.to_string(),
            retry: RetryPolicy::default(),
        }
    }

    /// Point the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Fetch a page body, retrying until it comes back `200 OK` with a
    /// non-empty body or the retry policy runs out.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let attempts = self.retry.attempts();
        let mut delays = self.retry.delays();
        let mut attempt = 1u32;
        loop {
            let err = match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(err) => err,
            };
            warn!(attempt, attempts, error = %err, "fetch attempt failed");
            match delays.next() {
                Some(delay) => sleep(delay).await,
                None => {
                    return Err(FullTimeError::FetchExhausted {
                        url: url.to_owned(),
                        attempts,
                        last: Box::new(err),
                    })
                }
            }
            attempt += 1;
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<String> {
        debug!(url, "fetching page");

        let response = self.http.get(url).send().await.map_err(|e| FullTimeError::Http {
            url: url.to_owned(),
            source: e,
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FullTimeError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            });
        }

        let body = response.text().await.map_err(|e| FullTimeError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })?;
        if body.is_empty() {
            return Err(FullTimeError::EmptyBody {
                url: url.to_owned(),
            });
        }
        Ok(body)
    }

    async fn fetch_source(&self, source: DataSource, lrcode: &str) -> Result<String> {
        self.fetch(&source.url(&self.base_url, lrcode)).await
    }

    /// Fetch and extract the fixtures listing of league `lrcode`.
    #[instrument(skip(self))]
    pub async fn get_fixtures(&self, lrcode: &str) -> Result<Vec<FixtureRecord>> {
        let body = self.fetch_source(DataSource::Fixtures, lrcode).await?;
        scraper::parse_fixtures(&body)
    }

    /// Fetch and extract the results listing of league `lrcode`.
    #[instrument(skip(self))]
    pub async fn get_results(&self, lrcode: &str) -> Result<Vec<ResultRecord>> {
        let body = self.fetch_source(DataSource::Results, lrcode).await?;
        scraper::parse_results(&body)
    }

    /// Fetch and extract the standings table of league `lrcode`.
    #[instrument(skip(self))]
    pub async fn get_table(&self, lrcode: &str) -> Result<LeagueTable> {
        let body = self.fetch_source(DataSource::Table, lrcode).await?;
        scraper::parse_table(&body)
    }
}
