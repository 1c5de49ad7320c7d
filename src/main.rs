use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fulltime_scraper::{run, Config, FullTimeClient, JsonSink, BASE_URL};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fulltime-scraper")]
#[command(about = "Scrape FA Full-Time fixtures, results and league table to JSON")]
struct Args {
    /// Directory the JSON files are written to
    #[arg(short, long, env = "FA_OUT_DIR", default_value = "data")]
    out_dir: PathBuf,

    /// Site to scrape
    #[arg(long, env = "FA_BASE_URL", default_value = BASE_URL)]
    base_url: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "configuration incomplete");
            eprintln!("❌ {err}");
            return ExitCode::FAILURE;
        }
    };

    let client = match FullTimeClient::new() {
        Ok(client) => client.with_base_url(args.base_url),
        Err(err) => {
            eprintln!("❌ {err}");
            return ExitCode::FAILURE;
        }
    };
    let sink = JsonSink::new(args.out_dir);

    match run(&client, &config, &sink).await {
        Ok(summary) => {
            println!("✅ {summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "run failed");
            eprintln!("❌ {err}");
            ExitCode::FAILURE
        }
    }
}
