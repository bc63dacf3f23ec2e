//! Utility functions for text handling, URL inspection and file system operations.
//!
//! This module provides helper functions used throughout the application:
//! - Character-safe truncation of display text
//! - HTML escaping and tag stripping for untrusted input
//! - Host extraction from item URLs
//! - Filler time synthesis for items without a timestamp
//! - Output directory preparation

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};
use url::Url;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Truncate a string to `max` characters, appending `...` if anything was cut.
///
/// Counts Unicode scalar values, not bytes, so multi-byte text is never split
/// inside a character.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_with_ellipsis("short", 100), "short");
/// assert_eq!(truncate_with_ellipsis("abcdef", 3), "abc...");
/// ```
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}...", &s[..cut]),
    }
}

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags and collapse runs of whitespace into single spaces.
pub fn clean_text(text: &str) -> String {
    let without_tags = TAG_RE.replace_all(text, "");
    WHITESPACE_RE
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}

/// Extract the host portion of a URL, dropping a leading `www.`.
///
/// Returns an empty string when the URL cannot be parsed or has no host.
/// Parse failures are not errors here; the caller just gets no domain.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_domain("https://www.example.com/page"), "example.com");
/// assert_eq!(extract_domain("#"), "");
/// ```
pub fn extract_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or("");
            host.strip_prefix("www.").unwrap_or(host).to_string()
        }
        Err(e) => {
            debug!(%url, error = %e, "Could not parse URL for domain");
            String::new()
        }
    }
}

/// Produce a plausible `HH:MM` time between 06:00 and 23:59.
///
/// Used for items that carry no time of their own. The value is cosmetic and
/// not derived from any real event.
pub fn synthesize_time<R: Rng + ?Sized>(rng: &mut R) -> String {
    let hour: u32 = rng.random_range(6..=23);
    let minute: u32 = rng.random_range(0..=59);
    format!("{hour:02}:{minute:02}")
}

/// Ensure the directory that will hold `path` exists.
///
/// Paths without a parent component (a bare file name) need nothing.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn ensure_parent_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).await?;
            debug!(dir = %parent.display(), "Output directory ready");
            Ok(())
        }
        _ => Ok(()),
    }
}
