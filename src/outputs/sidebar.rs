//! Sidebar layout with category filtering.
//!
//! Only categories that have items get a section; an empty category is left
//! out entirely, from the sections, the navigation and the filter bar. Cards
//! show the source favicon, source label and a time next to the badge, title
//! and summary.
//!
//! The inline script handles three things:
//! - smooth scrolling when a sidebar link is clicked
//! - filtering sections by category from the filter bar
//! - highlighting the sidebar link of the section currently in view

use super::card::CardView;
use super::{PageContext, Renderer, footer_html};
use crate::models::{Category, Item, ResultSet};
use crate::utils::html_escape;
use itertools::Itertools;
use rand::RngCore;

pub struct SidebarRenderer;

impl SidebarRenderer {
    /// Card fragment for one resolved item.
    pub fn render_card(card: &CardView) -> String {
        format!(
            r#"                <article class="card" data-category="{category}">
                    <div class="card-meta">
                        <img class="card-icon" src="{icon}" alt="" width="20" height="20" loading="lazy">
                        <span class="card-source">{source}</span>
                        <span class="card-time">{time}</span>
                    </div>
                    {badge}
                    {title}
                    <p>{summary}</p>
                </article>"#,
            category = card.category.id(),
            icon = html_escape(&card.icon_url),
            source = html_escape(&card.source),
            time = html_escape(&card.time),
            badge = card.badge_html(),
            title = card.title_html(),
            summary = html_escape(&card.summary),
        )
    }

    fn render_section(category: Category, items: &[Item], rng: &mut dyn RngCore) -> String {
        let cards = items
            .iter()
            .map(|item| Self::render_card(&CardView::resolve(item, category, &mut *rng)))
            .join("\n");

        format!(
            r#"            <section class="section" id="{id}" data-category="{id}">
                <h2 class="section-title">{heading} <span class="section-count">{count}</span></h2>
                <div class="cards">
{cards}
                </div>
            </section>"#,
            id = category.id(),
            heading = category.heading(),
            count = items.len(),
            cards = cards,
        )
    }

    fn render_nav(results: &ResultSet) -> String {
        non_empty(results)
            .map(|(category, items)| {
                format!(
                    r##"                <a class="nav-link" href="#{id}" data-target="{id}">{label} <span class="nav-count">{count}</span></a>"##,
                    id = category.id(),
                    label = category.label(),
                    count = items.len(),
                )
            })
            .join("\n")
    }

    fn render_filters(results: &ResultSet) -> String {
        let mut buttons =
            vec![r#"                <button class="filter-btn active" data-filter="all">All</button>"#.to_string()];
        buttons.extend(non_empty(results).map(|(category, _)| {
            format!(
                r#"                <button class="filter-btn" data-filter="{id}">{label}</button>"#,
                id = category.id(),
                label = category.label(),
            )
        }));
        buttons.join("\n")
    }
}

fn non_empty(results: &ResultSet) -> impl Iterator<Item = (Category, &[Item])> + '_ {
    results.iter().filter(|(_, items)| !items.is_empty())
}

impl Renderer for SidebarRenderer {
    fn name(&self) -> &'static str {
        "sidebar"
    }

    fn render_page(&self, results: &ResultSet, page: &PageContext, rng: &mut dyn RngCore) -> String {
        let sections = non_empty(results)
            .map(|(category, items)| Self::render_section(category, items, &mut *rng))
            .join("\n\n");

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{document_title}</title>
    <style>{style}</style>
</head>
<body>
    <div class="layout">
        <aside class="sidebar">
            <div class="brand">🐟 {title}</div>
            <p class="sidebar-date">{date_line}</p>
            <nav class="nav">
{nav}
            </nav>
            <p class="sidebar-total">{total} items</p>
        </aside>
        <main class="main">
            <header class="page-header">
                <h1>{title}</h1>
                <p class="tagline">{tagline}</p>
                <p class="date">{date_line}</p>
            </header>
            <div class="filters">
{filters}
            </div>

{sections}

            <footer>
                {footer}
            </footer>
        </main>
    </div>
    <script>{script}</script>
</body>
</html>
"#,
            document_title = html_escape(&page.document_title()),
            style = SIDEBAR_CSS,
            title = html_escape(&page.title),
            tagline = html_escape(&page.tagline),
            date_line = page.date_line(),
            nav = Self::render_nav(results),
            total = results.total(),
            filters = Self::render_filters(results),
            sections = sections,
            footer = footer_html(page),
            script = SIDEBAR_JS,
        )
    }
}

const SIDEBAR_CSS: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        html { scroll-behavior: smooth; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: #0f172a; color: #e2e8f0; min-height: 100vh;
        }
        .layout { display: flex; min-height: 100vh; }
        .sidebar {
            position: sticky; top: 0; height: 100vh; width: 240px; flex-shrink: 0;
            padding: 32px 20px; background: #111827; border-right: 1px solid rgba(255, 255, 255, 0.08);
            display: flex; flex-direction: column; gap: 12px;
        }
        .brand { font-size: 1.3rem; font-weight: 700; color: #fff; }
        .sidebar-date, .sidebar-total { color: #64748b; font-size: 0.85rem; }
        .nav { display: flex; flex-direction: column; gap: 4px; margin-top: 12px; }
        .nav-link {
            display: flex; justify-content: space-between; align-items: center;
            padding: 8px 12px; border-radius: 8px; color: #94a3b8; text-decoration: none;
            transition: background 0.2s, color 0.2s;
        }
        .nav-link:hover { background: rgba(255, 255, 255, 0.05); color: #fff; }
        .nav-link.active { background: rgba(0, 212, 255, 0.12); color: #00d4ff; }
        .nav-count { font-size: 0.75rem; color: #64748b; }
        .main { flex: 1; padding: 40px; max-width: 1100px; }
        .page-header h1 {
            font-size: 2.2rem; margin-bottom: 8px;
            background: linear-gradient(90deg, #00d4ff, #7c3aed);
            -webkit-background-clip: text; -webkit-text-fill-color: transparent;
        }
        .tagline { color: #94a3b8; }
        .date { color: #64748b; margin: 6px 0 24px; }
        .filters { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 32px; }
        .filter-btn {
            border: 1px solid rgba(255, 255, 255, 0.15); background: transparent; color: #cbd5e1;
            padding: 6px 14px; border-radius: 999px; cursor: pointer; font-size: 0.85rem;
        }
        .filter-btn.active { background: #00d4ff; border-color: #00d4ff; color: #0f172a; }
        .section { margin-bottom: 40px; scroll-margin-top: 24px; }
        .section-title {
            color: #fff; font-size: 1.4rem; margin-bottom: 18px;
            padding-left: 12px; border-left: 4px solid #00d4ff;
        }
        .section-count { font-size: 0.9rem; color: #64748b; font-weight: 400; }
        .cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 18px; }
        .card {
            background: rgba(255, 255, 255, 0.04); border: 1px solid rgba(255, 255, 255, 0.08);
            border-radius: 14px; padding: 20px; transition: transform 0.2s, border-color 0.2s;
        }
        .card:hover { transform: translateY(-3px); border-color: rgba(0, 212, 255, 0.4); }
        .card-meta { display: flex; align-items: center; gap: 8px; margin-bottom: 12px; font-size: 0.8rem; color: #64748b; }
        .card-icon { border-radius: 4px; background: #fff; }
        .card-time { margin-left: auto; }
        .card-category {
            display: inline-block; padding: 3px 10px; border-radius: 20px;
            font-size: 0.72rem; font-weight: 600; margin-bottom: 10px; color: #fff;
        }
        .category-news { background: linear-gradient(90deg, #ff6b6b, #ee5a24); }
        .category-tech { background: linear-gradient(90deg, #00d4ff, #0984e3); }
        .category-tutorial { background: linear-gradient(90deg, #00b894, #00cec9); }
        .category-fun { background: linear-gradient(90deg, #a29bfe, #6c5ce7); }
        .card h3 { font-size: 1.1rem; line-height: 1.4; margin-bottom: 10px; color: #fff; }
        .card h3 a { color: inherit; text-decoration: none; }
        .card h3 a:hover { color: #00d4ff; }
        .card p { color: #94a3b8; font-size: 0.9rem; line-height: 1.6; }
        footer { padding: 32px 0; color: #64748b; font-size: 0.85rem; }
        footer a { color: #00d4ff; text-decoration: none; }
        @media (max-width: 900px) {
            .layout { flex-direction: column; }
            .sidebar { position: static; height: auto; width: 100%; }
            .main { padding: 24px; }
            .cards { grid-template-columns: 1fr; }
        }
    "#;

const SIDEBAR_JS: &str = r#"
(function () {
    const links = document.querySelectorAll('.nav-link');
    const buttons = document.querySelectorAll('.filter-btn');
    const sections = document.querySelectorAll('.section');

    links.forEach(function (link) {
        link.addEventListener('click', function (event) {
            const target = document.getElementById(link.dataset.target);
            if (!target) return;
            event.preventDefault();
            target.scrollIntoView({ behavior: 'smooth', block: 'start' });
            history.replaceState(null, '', '#' + link.dataset.target);
        });
    });

    buttons.forEach(function (button) {
        button.addEventListener('click', function () {
            const filter = button.dataset.filter;
            buttons.forEach(function (b) { b.classList.toggle('active', b === button); });
            sections.forEach(function (section) {
                section.hidden = filter !== 'all' && section.dataset.category !== filter;
            });
        });
    });

    if (!('IntersectionObserver' in window)) return;
    const observer = new IntersectionObserver(function (entries) {
        entries.forEach(function (entry) {
            if (!entry.isIntersecting) return;
            links.forEach(function (link) {
                link.classList.toggle('active', link.dataset.target === entry.target.id);
            });
        });
    }, { rootMargin: '-20% 0px -70% 0px' });
    sections.forEach(function (section) { observer.observe(section); });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DigestConfig;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use scraper::{Html, Selector};

    fn page() -> PageContext {
        PageContext::new(
            &DigestConfig::default(),
            NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
        )
    }

    fn titled(title: &str) -> Item {
        Item {
            title: Some(title.to_string()),
            url: Some(format!("https://www.example.com/{title}")),
            ..Default::default()
        }
    }

    fn render_seeded(results: &ResultSet, seed: u64) -> String {
        let mut rng = StdRng::seed_from_u64(seed);
        SidebarRenderer.render_page(results, &page(), &mut rng)
    }

    fn select_texts(doc: &Html, selector: &str) -> Vec<String> {
        let sel = Selector::parse(selector).unwrap();
        doc.select(&sel)
            .map(|e| e.text().collect::<String>())
            .collect()
    }

    fn select_attrs(doc: &Html, selector: &str, attr: &str) -> Vec<String> {
        let sel = Selector::parse(selector).unwrap();
        doc.select(&sel)
            .filter_map(|e| e.value().attr(attr).map(str::to_string))
            .collect()
    }

    #[test]
    fn test_empty_result_set_has_no_sections() {
        let html = render_seeded(&ResultSet::empty(), 1);
        let doc = Html::parse_document(&html);

        assert!(select_texts(&doc, "section.section").is_empty());
        assert!(select_texts(&doc, "a.nav-link").is_empty());
        assert_eq!(select_attrs(&doc, "button.filter-btn", "data-filter"), vec!["all"]);
        assert!(!html.contains("empty-state"));
    }

    #[test]
    fn test_only_non_empty_categories_rendered() {
        let results = ResultSet {
            tech: vec![titled("t1"), titled("t2")],
            fun: vec![titled("f1")],
            ..Default::default()
        };
        let doc = Html::parse_document(&render_seeded(&results, 1));

        assert_eq!(select_attrs(&doc, "section.section", "id"), vec!["tech", "fun"]);
        assert_eq!(
            select_attrs(&doc, "a.nav-link", "href"),
            vec!["#tech", "#fun"]
        );
        assert_eq!(
            select_attrs(&doc, "button.filter-btn", "data-filter"),
            vec!["all", "tech", "fun"]
        );
        assert_eq!(select_texts(&doc, "a.nav-link .nav-count"), vec!["2", "1"]);
        assert_eq!(select_texts(&doc, ".sidebar-total"), vec!["3 items"]);
    }

    #[test]
    fn test_cards_in_input_order() {
        let results = ResultSet {
            tutorial: vec![titled("one"), titled("two"), titled("three"), titled("four")],
            ..Default::default()
        };
        let doc = Html::parse_document(&render_seeded(&results, 1));

        assert_eq!(
            select_texts(&doc, "section#tutorial article.card h3 a"),
            vec!["one", "two", "three", "four"]
        );
        assert_eq!(
            select_attrs(&doc, "section#tutorial article.card", "data-category"),
            vec!["tutorial"; 4]
        );
    }

    #[test]
    fn test_card_shows_icon_source_and_time() {
        let item = Item {
            title: Some("Paper of the day".to_string()),
            url: Some("https://www.example.com/page".to_string()),
            time: Some("08:45".to_string()),
            ..Default::default()
        };
        let results = ResultSet {
            news: vec![item],
            ..Default::default()
        };
        let html = render_seeded(&results, 1);
        let doc = Html::parse_document(&html);

        assert_eq!(select_texts(&doc, "#news .card-source"), vec!["example.com"]);
        assert_eq!(select_texts(&doc, "#news .card-time"), vec!["08:45"]);
        assert_eq!(
            select_attrs(&doc, "#news img.card-icon", "src"),
            vec!["https://www.google.com/s2/favicons?domain=example.com&sz=128"]
        );
        assert!(html.contains("domain=example.com&amp;sz=128"));
    }

    #[test]
    fn test_synthesized_time_when_missing() {
        let results = ResultSet {
            fun: vec![Item::default()],
            ..Default::default()
        };
        let doc = Html::parse_document(&render_seeded(&results, 11));
        let times = select_texts(&doc, "#fun .card-time");
        assert_eq!(times.len(), 1);
        let hour: u32 = times[0][..2].parse().unwrap();
        assert!((6..=23).contains(&hour));
    }

    #[test]
    fn test_same_seed_gives_identical_pages() {
        let results = ResultSet {
            news: vec![titled("a"), Item::default()],
            fun: vec![Item::default()],
            ..Default::default()
        };
        assert_eq!(render_seeded(&results, 7), render_seeded(&results, 7));
    }

    #[test]
    fn test_pages_differ_only_in_times() {
        let results = ResultSet {
            news: (0..20).map(|_| Item::default()).collect(),
            ..Default::default()
        };
        let first = render_seeded(&results, 1);
        let second = render_seeded(&results, 2);
        let time_re = regex::Regex::new(r#"<span class="card-time">\d{2}:\d{2}</span>"#).unwrap();
        let strip = |s: &str| time_re.replace_all(s, "").into_owned();
        assert_eq!(strip(&first), strip(&second));
    }

    #[test]
    fn test_script_is_embedded() {
        let html = render_seeded(&ResultSet::empty(), 1);
        assert!(html.contains("IntersectionObserver"));
        assert!(html.contains("scrollIntoView"));
        assert!(html.contains("data-filter"));
    }
}
