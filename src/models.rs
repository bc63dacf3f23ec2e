//! Data models for the digest input.
//!
//! This module defines the structures read from the search results file:
//! - [`Item`]: One entry of the digest, every field optional
//! - [`ResultSet`]: The four category lists for one generation run
//! - [`Category`]: The fixed set of categories and their display table
//!
//! Items are produced by an external collaborator and consumed as-is. Rather
//! than failing on missing fields, each field has a named accessor that
//! resolves the documented fallback.

use crate::utils::{extract_domain, synthesize_time, truncate_with_ellipsis};
use rand::RngCore;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Maximum number of characters of summary text shown on a card.
pub const SUMMARY_MAX_CHARS: usize = 200;

/// Summary shown when an item carries neither a summary nor a snippet.
pub const SUMMARY_PLACEHOLDER: &str = "click to view details…";

/// Link used when an item has no URL.
pub const LINK_PLACEHOLDER: &str = "#";

/// Domain handed to the favicon service when none can be derived.
pub const FALLBACK_ICON_DOMAIN: &str = "example.com";

/// One of the four fixed digest categories.
///
/// The declaration order is the render order of the page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    News,
    Tech,
    Tutorial,
    Fun,
}

/// Display metadata attached to a [`Category`].
#[derive(Debug)]
pub struct CategoryInfo {
    /// Key in the input JSON and anchor id in the page.
    pub id: &'static str,
    /// Emoji-prefixed badge label shown on cards and in navigation.
    pub label: &'static str,
    /// Heading of the category section.
    pub heading: &'static str,
    /// Message rendered in place of cards when the category is empty.
    pub empty_message: &'static str,
}

static CATEGORY_TABLE: [CategoryInfo; 4] = [
    CategoryInfo {
        id: "news",
        label: "📰 News",
        heading: "📰 AI News",
        empty_message: "No news today",
    },
    CategoryInfo {
        id: "tech",
        label: "💻 Tech",
        heading: "💻 Tech Articles",
        empty_message: "No articles today",
    },
    CategoryInfo {
        id: "tutorial",
        label: "📚 Tutorial",
        heading: "📚 Tutorials",
        empty_message: "No tutorials today",
    },
    CategoryInfo {
        id: "fun",
        label: "🎉 Fun",
        heading: "🎉 Fun Finds",
        empty_message: "Nothing fun today",
    },
];

impl Category {
    /// All categories, in section order.
    pub const ALL: [Category; 4] = [
        Category::News,
        Category::Tech,
        Category::Tutorial,
        Category::Fun,
    ];

    pub fn info(self) -> &'static CategoryInfo {
        &CATEGORY_TABLE[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn heading(self) -> &'static str {
        self.info().heading
    }

    pub fn empty_message(self) -> &'static str {
        self.info().empty_message
    }

    /// CSS class carrying the category's badge colours, e.g. `category-news`.
    pub fn css_class(self) -> String {
        format!("category-{}", self.id())
    }
}

/// A single digest entry as found in the search results file.
///
/// Every field is optional. A field holding anything other than a string
/// (a number, a list, `null`) is read as missing, so it falls back like an
/// absent one. Use the accessor methods rather than the raw fields when
/// rendering; they apply the fallback rules.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Item {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    /// The raw search-engine snippet.
    #[serde(default, deserialize_with = "lenient_string")]
    pub snippet: Option<String>,
    /// A pre-computed summary, preferred over `snippet` when present.
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub time: Option<String>,
}

/// Accept a string field as-is and treat any other JSON value as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        Value::Null => Ok(None),
        other => {
            debug!(value = %other, "Ignoring non-string item field");
            Ok(None)
        }
    }
}

impl Item {
    /// The title verbatim, or an empty string.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// The item's URL when it is an absolute `http` or `https` URL, else `#`.
    ///
    /// Other schemes (`javascript:`, `data:`, ...) never reach an `href`.
    pub fn link(&self) -> &str {
        match self.url.as_deref() {
            Some(url) if is_web_url(url) => url,
            _ => LINK_PLACEHOLDER,
        }
    }

    /// Summary text for the card.
    ///
    /// Prefers `summary`, then `snippet`, then [`SUMMARY_PLACEHOLDER`]. Empty
    /// strings count as missing. The result is clipped to
    /// [`SUMMARY_MAX_CHARS`] characters with `...` appended when clipped.
    pub fn display_summary(&self) -> String {
        let text = non_empty(&self.summary)
            .or_else(|| non_empty(&self.snippet))
            .unwrap_or(SUMMARY_PLACEHOLDER);
        truncate_with_ellipsis(text, SUMMARY_MAX_CHARS)
    }

    /// Source label: explicit `source`, else the URL's host without `www.`,
    /// else an empty string.
    pub fn source_label(&self) -> String {
        match non_empty(&self.source) {
            Some(source) => source.to_string(),
            None => extract_domain(self.link()),
        }
    }

    /// Domain used to look up the item's favicon.
    pub fn icon_domain(&self) -> String {
        let host = extract_domain(self.link());
        if !host.is_empty() {
            return host;
        }
        non_empty(&self.source)
            .unwrap_or(FALLBACK_ICON_DOMAIN)
            .to_string()
    }

    /// Favicon image URL from the third-party favicon service.
    pub fn icon_url(&self) -> String {
        format!(
            "https://www.google.com/s2/favicons?domain={}&sz=128",
            urlencoding::encode(&self.icon_domain())
        )
    }

    /// The explicit `time`, or a synthesized `HH:MM` between 06:00 and 23:59.
    ///
    /// The synthesized value is filler for display only.
    pub fn display_time(&self, rng: &mut dyn RngCore) -> String {
        match &self.time {
            Some(time) => time.clone(),
            None => synthesize_time(rng),
        }
    }
}

fn is_web_url(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// The four category lists for one generation run.
///
/// Missing keys deserialize as empty lists and unknown keys are ignored, so
/// a result set always has exactly the four categories.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResultSet {
    pub news: Vec<Item>,
    pub tech: Vec<Item>,
    pub tutorial: Vec<Item>,
    pub fun: Vec<Item>,
}

impl ResultSet {
    /// The canonical empty result set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self, category: Category) -> &[Item] {
        match category {
            Category::News => &self.news,
            Category::Tech => &self.tech,
            Category::Tutorial => &self.tutorial,
            Category::Fun => &self.fun,
        }
    }

    /// Iterate the categories in section order with their items.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Item])> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.items(c)))
    }

    pub fn total(&self) -> usize {
        self.iter().map(|(_, items)| items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
