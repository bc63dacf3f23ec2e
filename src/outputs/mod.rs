//! HTML page generation.
//!
//! This module turns a [`ResultSet`] into a single self-contained HTML
//! document (inline CSS and JS) and writes it to disk.
//!
//! # Submodules
//!
//! - [`card`]: Resolves one item into the values shown on its card
//! - [`classic`]: Plain card grid, every category shown with an empty state
//! - [`sidebar`]: Sidebar navigation, category filter and scroll-spy; empty
//!   categories are left out
//!
//! # Layouts
//!
//! Both layouts implement [`Renderer`]. Which one runs is a configuration
//! choice ([`Layout`]); the two are never mixed within one page.

use crate::config::DigestConfig;
use crate::models::ResultSet;
use crate::utils::{ensure_parent_dir, html_escape};
use chrono::{Local, NaiveDate};
use rand::RngCore;
use serde::Deserialize;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

pub mod card;
pub mod classic;
pub mod sidebar;

/// Available page layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Card grid with a section for every category.
    #[default]
    Classic,
    /// Filterable layout with sidebar navigation, favicons and times.
    Sidebar,
}

impl Layout {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Layout::Classic => Box::new(classic::ClassicRenderer),
            Layout::Sidebar => Box::new(sidebar::SidebarRenderer),
        }
    }
}

/// Page-level values shared by every layout.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Date the digest is generated for.
    pub date: NaiveDate,
    pub title: String,
    pub tagline: String,
    pub footer_link: Option<String>,
}

impl PageContext {
    pub fn new(config: &DigestConfig, date: NaiveDate) -> Self {
        Self {
            date,
            title: config.title.clone(),
            tagline: config.tagline.clone(),
            footer_link: config.footer_link.clone(),
        }
    }

    /// Context stamped with today's date from the local clock.
    pub fn today(config: &DigestConfig) -> Self {
        Self::new(config, Local::now().date_naive())
    }

    /// Contents of the `<title>` element, e.g. `AI Daily Digest - 2025-05-06`.
    pub fn document_title(&self) -> String {
        format!("{} - {}", self.title, self.date.format("%Y-%m-%d"))
    }

    /// Visible date line, e.g. `Tuesday, May 6, 2025`.
    pub fn date_line(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

/// A page layout.
pub trait Renderer {
    /// Short layout name used in logs.
    fn name(&self) -> &'static str;

    /// Render the complete HTML document for `results`.
    ///
    /// `rng` feeds the filler times of items without a time of their own.
    fn render_page(&self, results: &ResultSet, page: &PageContext, rng: &mut dyn RngCore) -> String;
}

/// Write the rendered document to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_page(path: &Path, html: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = ensure_parent_dir(path).await {
        error!(error = %e, "Failed to create output directory");
        return Err(e);
    }
    if let Err(e) = fs::write(path, html).await {
        error!(error = %e, "Failed to write HTML page");
        return Err(e.into());
    }
    info!(bytes = html.len(), "Wrote HTML page");
    Ok(())
}

/// Footer line shared by both layouts.
pub(crate) fn footer_html(page: &PageContext) -> String {
    match &page.footer_link {
        Some(link) => format!(
            r#"<p>Generated by {} | <a href="{}" target="_blank" rel="noopener">Source</a></p>"#,
            html_escape(&page.title),
            html_escape(link)
        ),
        None => format!("<p>Generated by {}</p>", html_escape(&page.title)),
    }
}
