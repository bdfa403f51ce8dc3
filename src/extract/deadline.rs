//! Deadline recovery from page text.
//!
//! Two pattern classes, in order: numeric dates anchored by a nearby
//! deadline keyword (English or Chinese, either digit order), then bare
//! ISO-ordered dates. The first calendar-valid match wins and is normalized
//! to zero-padded `YYYY-MM-DD`. Nothing is ever guessed.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

const KEYWORDS: &[&str] = &[
    "deadline",
    "due",
    "closing date",
    "close",
    "apply by",
    "submit by",
    "截止",
    "截止日期",
    "報名至",
    "限期",
];

// How far back (in chars) a keyword may sit from the date it anchors.
const KEYWORD_WINDOW: usize = 40;

// Big-endian: 2025/9/1, 2025-09-01, 2025.9.1
static YMD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})[./\-](\d{1,2})[./\-](\d{1,2})").unwrap());

// Little-endian: 1/9/2025, 01-09-2025
static DMY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})[./\-](\d{1,2})[./\-](\d{4})").unwrap());

// Bare ISO order, plausible years only.
static ISO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20\d{2})[./\-](\d{1,2})[./\-](\d{1,2})\b").unwrap());

pub fn find_deadline(lines: &[String]) -> Option<String> {
    let haystack = lines.join(" ");
    keyword_anchored(&haystack).or_else(|| bare_iso(&haystack))
}

fn keyword_anchored(haystack: &str) -> Option<String> {
    // (start offset, year, month, day)
    let mut candidates: Vec<(usize, i32, u32, u32)> = Vec::new();

    for caps in YMD_RE.captures_iter(haystack) {
        let start = caps.get(0)?.start();
        candidates.push((
            start,
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        ));
    }
    for caps in DMY_RE.captures_iter(haystack) {
        let start = caps.get(0)?.start();
        candidates.push((
            start,
            caps[3].parse().ok()?,
            caps[2].parse().ok()?,
            caps[1].parse().ok()?,
        ));
    }
    candidates.sort_by_key(|c| c.0);

    for (start, year, month, day) in candidates {
        if !keyword_precedes(haystack, start) {
            continue;
        }
        if let Some(date) = normalize(year, month, day) {
            return Some(date);
        }
    }
    None
}

fn bare_iso(haystack: &str) -> Option<String> {
    for caps in ISO_RE.captures_iter(haystack) {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        if let Some(date) = normalize(year, month, day) {
            return Some(date);
        }
    }
    None
}

/// Does a deadline keyword sit within the window right before `at`?
fn keyword_precedes(haystack: &str, at: usize) -> bool {
    let window: String = haystack[..at]
        .chars()
        .rev()
        .take(KEYWORD_WINDOW)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let lower = window.to_lowercase();
    KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Zero-padded ISO form, only for real calendar dates in a plausible range.
fn normalize(year: i32, month: u32, day: u32) -> Option<String> {
    if !(2000..=2099).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)?;
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

// ── Tests ──
