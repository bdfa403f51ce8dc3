//! Field recovery from loosely structured pages.
//!
//! Each field walks its own fallback ladder: structured metadata first, then
//! progressively blunter text heuristics. A rung only counts if it yields a
//! non-empty value after sanitization.

pub mod apply;
pub mod deadline;
pub mod page;

use crate::classify;
use crate::record::DraftFields;
use crate::text::{sanitize, truncate_chars};

use self::page::Page;

const TITLE_MAX_CHARS: usize = 120;
const TITLE_FALLBACK: &str = "Competition";
const DESCRIPTION_MAX_LINES: usize = 40;
const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Recover candidate fields from one fetched page.
pub fn extract(html: &str, source_url: &str) -> DraftFields {
    let page = Page::parse(html);
    let lines = page.visible_lines();

    let title = extract_title(&page, &lines);
    let description = extract_description(&page, &lines);
    let link = apply::find_apply_link(&page, source_url);
    let deadline = deadline::find_deadline(&lines);
    let category = classify::classify(&match &description {
        Some(d) => format!("{title} {d}"),
        None => title.clone(),
    });

    DraftFields {
        title,
        category: category.as_str().to_string(),
        eligibility: None,
        deadline,
        link,
        description,
    }
}

fn extract_title(page: &Page, lines: &[String]) -> String {
    let structured = [
        page.meta_content("og:title"),
        page.title(),
        page.first_heading(),
    ];
    for candidate in structured.into_iter().flatten() {
        let clean = sanitize(&candidate);
        if !clean.is_empty() {
            return clean;
        }
    }
    if let Some(first) = lines.first() {
        let clean = truncate_chars(&sanitize(first), TITLE_MAX_CHARS);
        if !clean.is_empty() {
            return clean;
        }
    }
    TITLE_FALLBACK.to_string()
}

fn extract_description(page: &Page, lines: &[String]) -> Option<String> {
    let structured = [
        page.meta_content("og:description"),
        page.meta_content("description"),
    ];
    for candidate in structured.into_iter().flatten() {
        let clean = sanitize(&candidate);
        if !clean.is_empty() {
            return Some(truncate_chars(&clean, DESCRIPTION_MAX_CHARS));
        }
    }

    let joined = lines
        .iter()
        .take(DESCRIPTION_MAX_LINES)
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    let clean = truncate_chars(&sanitize(&joined), DESCRIPTION_MAX_CHARS);
    if clean.is_empty() {
        None
    } else {
        Some(clean)
    }
}

// ── Tests ──
