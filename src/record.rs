//! Record types shared across the pipeline stages.

use serde::Serialize;

use crate::classify::Category;

/// Candidate fields recovered from one page, prior to validation.
///
/// `category` is kept as a raw label here: the classifier writes canonical
/// labels, but the validator still coerces anything off the closed set.
#[derive(Debug, Clone, Default)]
pub struct DraftFields {
    pub title: String,
    pub category: String,
    pub eligibility: Option<String>,
    pub deadline: Option<String>,
    pub link: String,
    pub description: Option<String>,
}

/// A validated competition record.
///
/// Field names and order match the export contract; absent optional fields
/// serialize as `null`, never get omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Competition {
    pub title: String,
    pub category: Category,
    pub eligibility: Option<String>,
    pub deadline: Option<String>,
    pub link: String,
    pub description: Option<String>,
}

impl Competition {
    /// Count of populated fields, used to pick the survivor when several
    /// records share a link. `Other` is the unset default for category and
    /// does not count.
    pub fn completeness(&self) -> usize {
        let mut score = 0;
        if !self.title.is_empty() {
            score += 1;
        }
        if self.category != Category::Other {
            score += 1;
        }
        if self.deadline.is_some() {
            score += 1;
        }
        if self.description.is_some() {
            score += 1;
        }
        score
    }
}

// ── Tests ──
