//! Classic card-grid layout.
//!
//! Every category gets a section, in fixed order. A category with no items
//! shows its empty-state message instead of cards. Cards carry the category
//! badge, the linked title, the summary and the source label. The page has no
//! script.

use super::card::CardView;
use super::{PageContext, Renderer, footer_html};
use crate::models::{Category, Item, ResultSet};
use crate::utils::html_escape;
use itertools::Itertools;
use rand::RngCore;

pub struct ClassicRenderer;

impl ClassicRenderer {
    /// Card fragment for one resolved item.
    pub fn render_card(card: &CardView) -> String {
        format!(
            r#"            <article class="card" data-category="{category}">
                {badge}
                {title}
                <p>{summary}</p>
                <span class="card-source">{source}</span>
            </article>"#,
            category = card.category.id(),
            badge = card.badge_html(),
            title = card.title_html(),
            summary = html_escape(&card.summary),
            source = html_escape(&card.source),
        )
    }

    fn render_section(category: Category, items: &[Item], rng: &mut dyn RngCore) -> String {
        let body = if items.is_empty() {
            format!(
                r#"            <p class="empty-state">{}</p>"#,
                category.empty_message()
            )
        } else {
            items
                .iter()
                .map(|item| Self::render_card(&CardView::resolve(item, category, &mut *rng)))
                .join("\n")
        };

        format!(
            r#"        <section class="section" id="{id}" data-category="{id}">
            <h2 class="section-title">{heading}</h2>
            <div class="cards">
{body}
            </div>
        </section>"#,
            id = category.id(),
            heading = category.heading(),
            body = body,
        )
    }
}

impl Renderer for ClassicRenderer {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn render_page(&self, results: &ResultSet, page: &PageContext, rng: &mut dyn RngCore) -> String {
        let sections = results
            .iter()
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
    <div class="container">
        <header>
            <h1>🐟 {title}</h1>
            <p>{tagline}</p>
        </header>
        <p class="date">{date_line}</p>

{sections}

        <footer>
            {footer}
        </footer>
    </div>
</body>
</html>
"#,
            document_title = html_escape(&page.document_title()),
            style = CLASSIC_CSS,
            title = html_escape(&page.title),
            tagline = html_escape(&page.tagline),
            date_line = page.date_line(),
            sections = sections,
            footer = footer_html(page),
        )
    }
}

const CLASSIC_CSS: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
            min-height: 100vh;
            padding: 20px;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        header { text-align: center; padding: 40px 0; color: #fff; }
        header h1 {
            font-size: 2.5rem; margin-bottom: 10px;
            background: linear-gradient(90deg, #00d4ff, #7c3aed);
            -webkit-background-clip: text; -webkit-text-fill-color: transparent;
        }
        header p { color: #94a3b8; font-size: 1.1rem; }
        .date { text-align: center; color: #64748b; margin-bottom: 30px; font-size: 1.1rem; }
        .section { margin-bottom: 40px; }
        .section-title {
            color: #fff; font-size: 1.5rem; margin-bottom: 20px;
            padding-left: 15px; border-left: 4px solid #00d4ff;
        }
        .cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(350px, 1fr)); gap: 20px; }
        .card {
            background: rgba(255, 255, 255, 0.05); border-radius: 16px; padding: 24px;
            border: 1px solid rgba(255, 255, 255, 0.1); transition: transform 0.3s, box-shadow 0.3s;
            backdrop-filter: blur(10px);
        }
        .card:hover { transform: translateY(-5px); box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3); }
        .card-category {
            display: inline-block; padding: 4px 12px; border-radius: 20px;
            font-size: 0.75rem; font-weight: 600; margin-bottom: 12px; color: #fff;
        }
        .category-news { background: linear-gradient(90deg, #ff6b6b, #ee5a24); }
        .category-tech { background: linear-gradient(90deg, #00d4ff, #0984e3); }
        .category-tutorial { background: linear-gradient(90deg, #00b894, #00cec9); }
        .category-fun { background: linear-gradient(90deg, #a29bfe, #6c5ce7); }
        .card h3 { color: #fff; font-size: 1.2rem; margin-bottom: 12px; line-height: 1.4; }
        .card h3 a { color: inherit; text-decoration: none; }
        .card h3 a:hover { color: #00d4ff; }
        .card p { color: #94a3b8; font-size: 0.9rem; line-height: 1.6; margin-bottom: 16px; }
        .card-source { color: #64748b; font-size: 0.8rem; }
        .empty-state { color: #64748b; }
        footer { text-align: center; padding: 40px 0; color: #64748b; font-size: 0.9rem; }
        footer a { color: #00d4ff; text-decoration: none; }
        @media (max-width: 768px) { .cards { grid-template-columns: 1fr; } header h1 { font-size: 2rem; } }
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

    fn render(results: &ResultSet) -> String {
        let mut rng = StdRng::seed_from_u64(5);
        ClassicRenderer.render_page(results, &page(), &mut rng)
    }

    fn select_texts(doc: &Html, selector: &str) -> Vec<String> {
        let sel = Selector::parse(selector).unwrap();
        doc.select(&sel)
            .map(|e| e.text().collect::<String>())
            .collect()
    }

    #[test]
    fn test_empty_result_set_shows_every_empty_state() {
        let html = render(&ResultSet::empty());
        let doc = Html::parse_document(&html);

        assert_eq!(select_texts(&doc, "section.section").len(), 4);
        assert_eq!(
            select_texts(&doc, "p.empty-state"),
            vec![
                "No news today",
                "No articles today",
                "No tutorials today",
                "Nothing fun today"
            ]
        );
        assert!(select_texts(&doc, "article.card").is_empty());
    }

    #[test]
    fn test_cards_per_section_in_input_order() {
        let results = ResultSet {
            news: vec![titled("first"), titled("second"), titled("third")],
            fun: vec![titled("joke")],
            ..Default::default()
        };
        let doc = Html::parse_document(&render(&results));

        assert_eq!(
            select_texts(&doc, "section#news article.card h3 a"),
            vec!["first", "second", "third"]
        );
        assert_eq!(select_texts(&doc, "section#fun article.card").len(), 1);
        assert_eq!(select_texts(&doc, "section#tech article.card").len(), 0);
        assert_eq!(
            select_texts(&doc, "section#tech p.empty-state"),
            vec!["No articles today"]
        );
        assert!(select_texts(&doc, "section#news p.empty-state").is_empty());
    }

    #[test]
    fn test_card_fields() {
        let item = Item {
            title: Some("Agents & tools".to_string()),
            url: Some("https://www.example.com/page".to_string()),
            ..Default::default()
        };
        let results = ResultSet {
            tech: vec![item],
            ..Default::default()
        };
        let doc = Html::parse_document(&render(&results));

        assert_eq!(select_texts(&doc, "#tech .card-source"), vec!["example.com"]);
        assert_eq!(
            select_texts(&doc, "#tech .card p"),
            vec!["click to view details…"]
        );
        assert_eq!(select_texts(&doc, "#tech .card h3 a"), vec!["Agents & tools"]);
        assert_eq!(
            select_texts(&doc, "#tech .card-category.category-tech"),
            vec!["💻 Tech"]
        );
    }

    #[test]
    fn test_title_and_date_stamped() {
        let doc = Html::parse_document(&render(&ResultSet::empty()));
        assert_eq!(select_texts(&doc, "title"), vec!["AI Daily Digest - 2025-05-06"]);
        assert_eq!(select_texts(&doc, "p.date"), vec!["Tuesday, May 6, 2025"]);
    }

    #[test]
    fn test_render_is_deterministic_for_fixed_date() {
        let results = ResultSet {
            news: vec![titled("a"), Item::default()],
            tutorial: vec![titled("b")],
            ..Default::default()
        };
        let first = ClassicRenderer.render_page(&results, &page(), &mut StdRng::seed_from_u64(1));
        let second = ClassicRenderer.render_page(&results, &page(), &mut StdRng::seed_from_u64(2));
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_script_in_classic_page() {
        let html = render(&ResultSet::empty());
        assert!(!html.contains("<script"));
    }
}
