//! Record quality gate between extraction and the output collection.

use std::sync::LazyLock;

use regex::Regex;

use crate::classify::Category;
use crate::record::{Competition, DraftFields};
use crate::text::word_count;

const MIN_TITLE_CHARS: usize = 6;
const MIN_DESCRIPTION_WORDS: usize = 3;

// Placeholder strings and raw binary markers that show up as titles when a
// fetch lands on the wrong kind of page.
static JUNK_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(%PDF|about:blank|untitled|got here)\b").unwrap());

// At least one real letter: Latin (plus Latin-1/Extended) or CJK.
static LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z\u{00C0}-\u{024F}\u{2E80}-\u{9FFF}]").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("title shorter than 6 characters")]
    TitleTooShort,
    #[error("junk title")]
    JunkTitle,
    #[error("title has no letters")]
    TitleNoLetters,
    #[error("link is not an absolute http(s) address")]
    BadLink,
}

/// Apply the hard rules in order; the first failure rejects the record.
/// Category and description problems never reject, they get corrected.
pub fn validate(draft: DraftFields) -> Result<Competition, Rejection> {
    let title = draft.title.trim().to_string();
    if title.chars().count() < MIN_TITLE_CHARS {
        return Err(Rejection::TitleTooShort);
    }
    if JUNK_TITLE_RE.is_match(&title) {
        return Err(Rejection::JunkTitle);
    }
    if !LETTER_RE.is_match(&title) {
        return Err(Rejection::TitleNoLetters);
    }

    let link = draft.link.trim().to_string();
    if !link.starts_with("http://") && !link.starts_with("https://") {
        return Err(Rejection::BadLink);
    }

    let category = Category::parse(&draft.category).unwrap_or(Category::Other);
    let description = draft
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| word_count(d) >= MIN_DESCRIPTION_WORDS);

    Ok(Competition {
        title,
        category,
        eligibility: draft.eligibility,
        deadline: draft.deadline,
        link,
        description,
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> DraftFields {
        DraftFields {
            title: title.to_string(),
            category: "Other".to_string(),
            link: "https://example.org/page".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn rejects_short_title() {
        assert_eq!(validate(draft("Hi")), Err(Rejection::TitleTooShort));
        assert_eq!(validate(draft("   Hi   ")), Err(Rejection::TitleTooShort));
    }

    #[test]
    fn rejects_junk_titles() {
        assert_eq!(validate(draft("%PDF-1.4 report")), Err(Rejection::JunkTitle));
        assert_eq!(validate(draft("about:blank page")), Err(Rejection::JunkTitle));
        assert_eq!(validate(draft("Untitled document")), Err(Rejection::JunkTitle));
    }

    #[test]
    fn rejects_titles_without_letters() {
        assert_eq!(validate(draft("123456")), Err(Rejection::TitleNoLetters));
        assert_eq!(validate(draft("*** !!! ***")), Err(Rejection::TitleNoLetters));
    }

    #[test]
    fn accepts_cjk_titles() {
        let record = validate(draft("全港青年寫作比賽")).unwrap();
        assert_eq!(record.title, "全港青年寫作比賽");
    }

    #[test]
    fn rejects_non_http_links() {
        let mut d = draft("Valid Competition Title");
        d.link = "ftp://example.org/file".to_string();
        assert_eq!(validate(d), Err(Rejection::BadLink));

        let mut d = draft("Valid Competition Title");
        d.link = "  ".to_string();
        assert_eq!(validate(d), Err(Rejection::BadLink));
    }

    #[test]
    fn coerces_unknown_category_to_other() {
        let mut d = draft("Valid Competition Title");
        d.category = "Unknown".to_string();
        assert_eq!(validate(d).unwrap().category, Category::Other);
    }

    #[test]
    fn keeps_canonical_category() {
        let mut d = draft("Valid Competition Title");
        d.category = "Science".to_string();
        assert_eq!(validate(d).unwrap().category, Category::Science);
    }

    #[test]
    fn nulls_thin_description() {
        let mut d = draft("Valid Competition Title");
        d.description = Some("too thin".to_string());
        assert_eq!(validate(d).unwrap().description, None);

        let mut d = draft("Valid Competition Title");
        d.description = Some("three whole words".to_string());
        assert!(validate(d).unwrap().description.is_some());
    }

    #[test]
    fn validation_is_idempotent() {
        let mut d = draft("  Valid Competition Title  ");
        d.category = "Nonsense".to_string();
        d.description = Some("one two".to_string());
        d.deadline = Some("2025-09-01".to_string());

        let first = validate(d).unwrap();
        let again = validate(DraftFields {
            title: first.title.clone(),
            category: first.category.as_str().to_string(),
            eligibility: first.eligibility.clone(),
            deadline: first.deadline.clone(),
            link: first.link.clone(),
            description: first.description.clone(),
        })
        .unwrap();
        assert_eq!(first, again);
    }
}
