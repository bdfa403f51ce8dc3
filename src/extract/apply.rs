//! Apply-link selection.

use url::Url;

use super::page::Page;

// Anchor-text vocabulary, English and Traditional Chinese.
const APPLY_WORDS: &[&str] = &[
    "apply",
    "register",
    "sign up",
    "signup",
    "enrol",
    "enroll",
    "submit",
    "join now",
    "報名",
    "申請",
    "參加",
    "登記",
    "遞交",
];

/// First hyperlink whose anchor text matches the apply vocabulary, resolved
/// to an absolute address against the page's own address. Fragment-only,
/// `javascript:` and `mailto:` targets never qualify. With no match the
/// source address itself is the apply link.
pub fn find_apply_link(page: &Page, source_url: &str) -> String {
    let base = Url::parse(source_url).ok();

    for anchor in page.anchors() {
        let href = anchor.href.trim();
        if href.is_empty()
            || href.starts_with('#')
            || href.starts_with("javascript:")
            || href.starts_with("mailto:")
        {
            continue;
        }
        let text = anchor.text.to_lowercase();
        if !APPLY_WORDS.iter().any(|w| text.contains(w)) {
            continue;
        }

        let resolved = match &base {
            Some(b) => b.join(href).ok(),
            None => Url::parse(href).ok(),
        };
        if let Some(abs) = resolved {
            if matches!(abs.scheme(), "http" | "https") {
                return abs.to_string();
            }
        }
    }

    source_url.to_string()
}

// ── Tests ──
