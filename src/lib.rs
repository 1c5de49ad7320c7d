//! Best-effort scraper for FA Full-Time league pages.
//!
//! Full-Time publishes fixtures, results and standings as loosely structured
//! HTML tables whose columns vary between leagues. The [`scraper`] module
//! recovers records from those tables by content rather than column
//! position, and [`FullTimeClient`] fetches the pages with bounded retries.

pub use client::FullTimeClient;
pub use config::Config;
pub use error::{FullTimeError, Result};
pub use job::{run, RunSummary};
pub use model::*;
pub use retry::RetryPolicy;
pub use sink::JsonSink;
pub use source::{DataSource, BASE_URL};

mod client;
pub mod config;
mod error;
mod job;
mod model;
mod retry;
pub mod scraper;
mod sink;
mod source;
