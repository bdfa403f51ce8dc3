//! Keyword-based category assignment.
//!
//! Pages mix English and Traditional Chinese, so every category carries
//! keywords in both. First matching category in table order wins.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Business,
    Technology,
    Design,
    Arts,
    Writing,
    Science,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Design => "Design",
            Category::Arts => "Arts",
            Category::Writing => "Writing",
            Category::Science => "Science",
            Category::Other => "Other",
        }
    }

    /// Exact canonical label only; anything else is `None` and the
    /// validator coerces it to `Other`.
    pub fn parse(label: &str) -> Option<Category> {
        match label {
            "Business" => Some(Category::Business),
            "Technology" => Some(Category::Technology),
            "Design" => Some(Category::Design),
            "Arts" => Some(Category::Arts),
            "Writing" => Some(Category::Writing),
            "Science" => Some(Category::Science),
            "Other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Priority order is fixed: earlier rows win when keywords from several
// categories appear in the same text.
const KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Business,
        &[
            "startup", "business", "entrepreneur", "pitch", "商業", "創業", "初創", "市場推廣",
        ],
    ),
    (
        Category::Technology,
        &[
            "hackathon", "coding", "programming", "software", "developer", "科技", "編程", "程式",
            "黑客松", "人工智能",
        ],
    ),
    (
        Category::Design,
        &["design", "logo", "poster", "設計", "海報"],
    ),
    (
        Category::Arts,
        &[
            "art", "painting", "drawing", "music", "photography", "film", "藝術", "繪畫", "音樂",
            "攝影", "短片",
        ],
    ),
    (
        Category::Writing,
        &[
            "essay", "writing", "poetry", "story", "寫作", "徵文", "詩歌", "作文",
        ],
    ),
    (
        Category::Science,
        &[
            "science", "math", "physics", "chemistry", "biology", "robot", "科學", "數學", "機械人",
            "物理", "化學", "生物",
        ],
    ),
];

/// Map free text to a category by keyword membership. No scoring: the first
/// category with any keyword present wins, otherwise `Other`.
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();
    for (category, keywords) in KEYWORDS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *category;
        }
    }
    Category::Other
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_keywords() {
        assert_eq!(classify("Youth Startup Pitch Challenge"), Category::Business);
        assert_eq!(classify("48-hour hackathon for students"), Category::Technology);
        assert_eq!(classify("Short Film Festival open call"), Category::Arts);
    }

    #[test]
    fn chinese_keywords() {
        assert_eq!(classify("全港創業比賽"), Category::Business);
        assert_eq!(classify("中學生編程挑戰賽"), Category::Technology);
        assert_eq!(classify("青年寫作及徵文比賽"), Category::Writing);
        assert_eq!(classify("海報設計大賽"), Category::Design);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("ANNUAL ESSAY COMPETITION"), Category::Writing);
    }

    #[test]
    fn priority_order_breaks_overlaps() {
        // Both Business ("startup") and Arts ("art", inside "startup") match;
        // Business sits earlier in the table.
        assert_eq!(classify("startup art jam"), Category::Business);
    }

    #[test]
    fn no_match_falls_back_to_other() {
        assert_eq!(classify("general notice board"), Category::Other);
        assert_eq!(classify(""), Category::Other);
    }

    #[test]
    fn parse_accepts_canonical_labels_only() {
        assert_eq!(Category::parse("Science"), Some(Category::Science));
        assert_eq!(Category::parse("science"), None);
        assert_eq!(Category::parse("Unknown"), None);
    }

    #[test]
    fn label_round_trips() {
        for (category, _) in KEYWORDS {
            assert_eq!(Category::parse(category.as_str()), Some(*category));
        }
        assert_eq!(Category::parse(Category::Other.as_str()), Some(Category::Other));
    }
}
