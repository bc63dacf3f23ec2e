//! Per-item card values.
//!
//! [`CardView`] applies the item fallback rules once and holds the resolved,
//! still unescaped, display strings. Layouts escape them as they write markup.

use crate::models::{Category, Item};
use crate::utils::html_escape;
use rand::RngCore;

/// Resolved display values for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub category: Category,
    pub title: String,
    pub link: String,
    pub summary: String,
    pub source: String,
    pub time: String,
    pub icon_url: String,
}

impl CardView {
    /// Resolve `item` for display under `category`.
    ///
    /// Never fails: every missing or unusable field degrades to its default.
    pub fn resolve(item: &Item, category: Category, rng: &mut dyn RngCore) -> Self {
        Self {
            category,
            title: item.display_title().to_string(),
            link: item.link().to_string(),
            summary: item.display_summary(),
            source: item.source_label(),
            time: item.display_time(rng),
            icon_url: item.icon_url(),
        }
    }

    /// Category badge markup shared by both layouts.
    pub fn badge_html(&self) -> String {
        format!(
            r#"<span class="card-category {}">{}</span>"#,
            self.category.css_class(),
            self.category.label()
        )
    }

    /// Linked title markup shared by both layouts.
    pub fn title_html(&self) -> String {
        format!(
            r#"<h3><a href="{}" target="_blank" rel="noopener">{}</a></h3>"#,
            html_escape(&self.link),
            html_escape(&self.title)
        )
    }
}
