//! Seed address list.

use std::path::Path;

use anyhow::{Context, Result};

// Listing pages known to publish Hong Kong competitions. The pipeline never
// follows links off these pages; each address is one extraction unit.
const DEFAULT_SOURCES: &[&str] = &[
    "https://www.youth.gov.hk/en/useful-resources/competition/index.htm",
    "https://www.hkfyg.org.hk/en/category/competitions/",
    "https://www.hkstp.org/what-we-offer/competitions/",
    "https://inno.hkeaa.edu.hk/competitions",
    "https://www.ayp.org.hk/events/",
];

/// Addresses from `path` (one per line, `#` starts a comment), or the
/// built-in list when no file is given.
pub fn load(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("reading source list {}", p.display()))?;
            Ok(raw
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(str::to_string)
                .collect())
        }
        None => Ok(DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect()),
    }
}

// ── Tests ──
