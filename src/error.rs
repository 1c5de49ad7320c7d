use ::scraper::error::SelectorErrorKind;
use std::path::PathBuf;

/// All errors that can occur while fetching, extracting or writing league data.
#[derive(thiserror::Error, Debug)]
pub enum FullTimeError {
    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned something other than `200 OK`.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// Server answered `200 OK` with nothing in the body.
    #[error("empty response body from {url}")]
    EmptyBody { url: String },

    /// Every attempt allowed by the retry policy failed.
    #[error("failed to fetch after {attempts} attempts: {url}")]
    FetchExhausted {
        url: String,
        attempts: u32,
        #[source]
        last: Box<FullTimeError>,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// One or more league identifiers are not configured.
    #[error("missing required env var(s): {}", .vars.join(", "))]
    MissingConfig { vars: Vec<&'static str> },

    /// Output file or directory could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Records could not be serialized to JSON.
    #[error("failed to serialize {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl<'a> From<SelectorErrorKind<'a>> for FullTimeError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        FullTimeError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FullTimeError>;
