//! Read-only view over a parsed HTML document.

use std::sync::LazyLock;

use scraper::{Html, Selector};

static META_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("meta[content]").unwrap());
static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static HEADING_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1, h2").unwrap());
static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

// Elements whose text never renders.
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];

pub struct Anchor {
    pub text: String,
    pub href: String,
}

pub struct Page {
    doc: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Page {
            doc: Html::parse_document(html),
        }
    }

    /// Content of the first `<meta>` whose `property` or `name` equals `key`.
    pub fn meta_content(&self, key: &str) -> Option<String> {
        self.doc
            .select(&META_SEL)
            .find(|el| {
                el.value().attr("property") == Some(key) || el.value().attr("name") == Some(key)
            })
            .and_then(|el| el.value().attr("content"))
            .map(str::to_string)
            .filter(|c| !c.trim().is_empty())
    }

    pub fn title(&self) -> Option<String> {
        self.doc
            .select(&TITLE_SEL)
            .next()
            .map(|el| el.text().collect::<String>())
            .filter(|t| !t.trim().is_empty())
    }

    pub fn first_heading(&self) -> Option<String> {
        self.doc
            .select(&HEADING_SEL)
            .next()
            .map(|el| el.text().collect::<String>())
            .filter(|t| !t.trim().is_empty())
    }

    /// Rendered text as trimmed, non-empty lines, in document order.
    pub fn visible_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for node in self.doc.root_element().descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node.ancestors().any(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|el| HIDDEN_TAGS.contains(&el.name()))
            });
            if hidden {
                continue;
            }
            for line in text.split('\n') {
                let line = line.trim();
                if !line.is_empty() {
                    lines.push(line.to_string());
                }
            }
        }
        lines
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        self.doc
            .select(&ANCHOR_SEL)
            .map(|el| Anchor {
                text: el.text().collect::<String>(),
                href: el.value().attr("href").unwrap_or_default().to_string(),
            })
            .collect()
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<html><head>
        <title>Page Title</title>
        <meta property="og:title" content="OG Title">
        <meta name="description" content="Meta description here">
        <style>body { color: red }</style>
    </head><body>
        <h2>First Heading</h2>
        <p>Visible paragraph.</p>
        <a href="/apply">Apply here</a>
        <script>var hidden = "secret";</script>
    </body></html>"#;

    #[test]
    fn reads_meta_by_property_and_name() {
        let page = Page::parse(DOC);
        assert_eq!(page.meta_content("og:title").as_deref(), Some("OG Title"));
        assert_eq!(
            page.meta_content("description").as_deref(),
            Some("Meta description here")
        );
        assert_eq!(page.meta_content("og:image"), None);
    }

    #[test]
    fn reads_title_and_heading() {
        let page = Page::parse(DOC);
        assert_eq!(page.title().as_deref(), Some("Page Title"));
        assert_eq!(page.first_heading().as_deref(), Some("First Heading"));
    }

    #[test]
    fn visible_lines_skip_script_style_and_head() {
        let page = Page::parse(DOC);
        let lines = page.visible_lines();
        assert!(lines.contains(&"Visible paragraph.".to_string()));
        assert!(lines.contains(&"First Heading".to_string()));
        assert!(!lines.iter().any(|l| l.contains("secret")));
        assert!(!lines.iter().any(|l| l.contains("color")));
        assert!(!lines.iter().any(|l| l.contains("Page Title")));
    }

    #[test]
    fn collects_anchors() {
        let page = Page::parse(DOC);
        let anchors = page.anchors();
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].href, "/apply");
        assert_eq!(anchors[0].text, "Apply here");
    }
}
