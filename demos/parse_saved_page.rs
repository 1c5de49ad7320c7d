//! Run one extractor over a page saved to disk and print the records as JSON.
//!
//! ```sh
//! cargo run --example parse_saved_page -- results saved/results.html
//! ```

use std::error::Error;

use fulltime_scraper::scraper::{parse_fixtures, parse_results, parse_table};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let (Some(kind), Some(path)) = (args.next(), args.next()) else {
        eprintln!("usage: parse_saved_page <fixtures|results|table> <file.html>");
        std::process::exit(2);
    };

    let body = std::fs::read_to_string(&path)?;
    let json = match kind.as_str() {
        "fixtures" => serde_json::to_string_pretty(&parse_fixtures(&body)?)?,
        "results" => serde_json::to_string_pretty(&parse_results(&body)?)?,
        "table" => serde_json::to_string_pretty(&parse_table(&body)?)?,
        other => return Err(format!("unknown page kind: {other}").into()),
    };
    println!("{json}");
    Ok(())
}
