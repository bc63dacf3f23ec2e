//! Loading the search results file.
//!
//! The results file is produced by an external search step. A missing file is
//! not an error: the run proceeds with the empty result set and renders an
//! empty digest. A file that exists but cannot be parsed is an error and is
//! returned to the caller; nothing is written in that case.

use crate::models::ResultSet;
use crate::utils::{clean_text, truncate_with_ellipsis};
use std::error::Error;
use std::fmt::Write;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

/// Number of items previewed per category by [`describe`].
const PREVIEW_ITEMS: usize = 2;

/// Load the result set from `path`.
///
/// # Returns
///
/// The parsed [`ResultSet`], or [`ResultSet::empty`] when the file does not
/// exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or if its contents
/// are not a valid results document.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_result_set(path: &Path) -> Result<ResultSet, Box<dyn Error>> {
    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Results file not found; using empty result set");
            return Ok(ResultSet::empty());
        }
        Err(e) => return Err(e.into()),
    };
    debug!(bytes = text.len(), "Read results file");

    let results: ResultSet = serde_json::from_str(&text)?;
    info!(
        news = results.news.len(),
        tech = results.tech.len(),
        tutorial = results.tutorial.len(),
        fun = results.fun.len(),
        "Loaded result set"
    );
    Ok(results)
}

/// Human-readable overview of a result set.
///
/// Lists the item count of each category followed by the first few items,
/// with the title, URL and existing snippet clipped for terminal display.
pub fn describe(results: &ResultSet) -> String {
    let mut out = String::new();
    for (category, items) in results.iter() {
        writeln!(out, "{}: {} items", category.id(), items.len()).ok();
        for item in items.iter().take(PREVIEW_ITEMS) {
            writeln!(
                out,
                "  - {}",
                truncate_with_ellipsis(item.display_title(), 50)
            )
            .ok();
            writeln!(out, "    URL: {}", item.url.as_deref().unwrap_or("")).ok();
            let snippet = clean_text(item.snippet.as_deref().unwrap_or(""));
            writeln!(out, "    Snippet: {}", truncate_with_ellipsis(&snippet, 80)).ok();
        }
    }
    out
}
