//! Command-line interface definitions for the digest generator.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Paths and the layout can also come from environment variables or a YAML
//! config file; see [`crate::config`] for the precedence rules.

use crate::outputs::Layout;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the digest generator.
///
/// Every option is optional. Anything left unset falls back to the config
/// file (when given) and then to the built-in defaults.
///
/// # Examples
///
/// ```sh
/// # Read ./search_results.json, write ./index.html
/// daily_digest
///
/// # Explicit paths with the filterable sidebar layout
/// daily_digest -i data/results.json -o public/index.html --layout sidebar
///
/// # Show what is in the results file without rendering
/// daily_digest -i data/results.json --inspect
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search results JSON file to read
    #[arg(short, long, env = "DIGEST_INPUT")]
    pub input: Option<PathBuf>,

    /// HTML file to write (overwritten if it exists)
    #[arg(short, long, env = "DIGEST_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Page layout
    #[arg(short, long, value_enum, env = "DIGEST_LAYOUT")]
    pub layout: Option<Layout>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print an overview of the results file and exit without writing
    #[arg(long)]
    pub inspect: bool,
}
