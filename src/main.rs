//! # Daily Digest
//!
//! Renders a static HTML "daily digest" page from a JSON file of categorized
//! items: news, tech articles, tutorials and fun finds.
//!
//! ## Features
//!
//! - Reads the search results file produced by an external search step
//! - Tolerates missing fields on every item with documented fallbacks
//! - Two page layouts: a classic card grid, and a filterable sidebar layout
//!   with favicons, times and scroll-spy navigation
//! - Stamps the page with today's date
//!
//! ## Usage
//!
//! ```sh
//! daily_digest -i search_results.json -o index.html --layout sidebar
//! ```
//!
//! ## Architecture
//!
//! One run is a straight line:
//! 1. **Config**: Resolve paths and layout from flags, config file and defaults
//! 2. **Load**: Read the results file (missing file means an empty digest)
//! 3. **Render**: Build the full HTML document with the selected layout
//! 4. **Write**: Overwrite the output file

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod loader;
mod models;
mod outputs;
mod utils;

use cli::Cli;
use config::{DigestConfig, load_file_config};
use loader::{describe, load_result_set};
use outputs::{PageContext, write_page};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("daily_digest starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.input, ?args.output, ?args.layout, ?args.config, "Parsed CLI arguments");

    let file_config = match &args.config {
        Some(path) => Some(load_file_config(path).await?),
        None => None,
    };
    let config = DigestConfig::resolve(&args, file_config);
    info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        layout = ?config.layout,
        "Resolved configuration"
    );

    // ---- Load ----
    let results = load_result_set(&config.input_path).await?;
    if results.is_empty() {
        warn!("Result set has no items; the digest will be empty");
    }

    if args.inspect {
        print!("{}", describe(&results));
        return Ok(());
    }

    // ---- Render ----
    let renderer = config.layout.renderer();
    let page = PageContext::today(&config);
    let html = renderer.render_page(&results, &page, &mut rand::rng());
    info!(
        layout = renderer.name(),
        items = results.total(),
        bytes = html.len(),
        date = %page.date,
        "Rendered digest page"
    );

    // ---- Write ----
    write_page(&config.output_path, &html).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        path = %config.output_path.display(),
        "Execution complete"
    );

    Ok(())
}
