//! Keyword-based category classification for free-text interests and career roles.
//!
//! Every table is scanned once in fixed priority order; the first category whose
//! trigger list intersects the lower-cased text wins.

use crate::domain::model::{is_general, UNSURE};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AiMl,
    DataScience,
    FullStack,
    Testing,
    Cybersecurity,
}

impl Category {
    /// Priority order used by every keyword table.
    pub const ALL: [Category; 5] = [
        Category::AiMl,
        Category::DataScience,
        Category::FullStack,
        Category::Testing,
        Category::Cybersecurity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AiMl => "ai_ml",
            Category::DataScience => "data_science",
            Category::FullStack => "full_stack",
            Category::Testing => "testing",
            Category::Cybersecurity => "cybersecurity",
        }
    }

    /// Value fed back into `Profile::interest` when a category is picked explicitly.
    pub fn interest_label(&self) -> &'static str {
        match self {
            Category::AiMl => "ai ml",
            Category::DataScience => "data science",
            Category::FullStack => "full stack",
            Category::Testing => "testing",
            Category::Cybersecurity => "cybersecurity",
        }
    }

    /// Lower-case substrings that identify a course of this category by name.
    pub fn name_markers(&self) -> &'static [&'static str] {
        match self {
            Category::AiMl => &["artificial intelligence", "machine learning"],
            Category::DataScience => &["data science"],
            Category::FullStack => &["full stack", "mern"],
            Category::Testing => &["sdet"],
            Category::Cybersecurity => &["cyber", "security"],
        }
    }

    /// Course-name markers used by career-role scoring; narrower than
    /// `name_markers` for ai_ml, where only "artificial intelligence" counts.
    pub fn role_markers(&self) -> &'static [&'static str] {
        match self {
            Category::AiMl => &["artificial intelligence"],
            other => other.name_markers(),
        }
    }

    pub fn related(&self) -> Option<Category> {
        match self {
            Category::AiMl => Some(Category::DataScience),
            Category::DataScience => Some(Category::AiMl),
            Category::FullStack | Category::Testing | Category::Cybersecurity => None,
        }
    }

    /// `course_name` must already be lower-cased.
    pub fn matches_course_name(&self, course_name: &str) -> bool {
        self.name_markers()
            .iter()
            .any(|marker| course_name.contains(marker))
    }

    /// `course_name` must already be lower-cased.
    pub fn matches_course_role(&self, course_name: &str) -> bool {
        self.role_markers()
            .iter()
            .any(|marker| course_name.contains(marker))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct CategoryRule {
    category: Category,
    triggers: &'static [&'static str],
}

const INTEREST_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::AiMl,
        triggers: &[
            "ai",
            "ml",
            "machine learning",
            "artificial intelligence",
            "deep learning",
            "intelligent",
        ],
    },
    CategoryRule {
        category: Category::DataScience,
        triggers: &["data", "analytics", "insights", "statistics", "numbers", "patterns"],
    },
    CategoryRule {
        category: Category::FullStack,
        triggers: &[
            "web",
            "website",
            "apps",
            "development",
            "frontend",
            "backend",
            "full stack",
            "building",
            "creating",
        ],
    },
    CategoryRule {
        category: Category::Testing,
        triggers: &["testing", "qa", "quality", "automation", "sdet", "ensuring"],
    },
    CategoryRule {
        category: Category::Cybersecurity,
        triggers: &[
            "security",
            "cyber",
            "hacking",
            "protection",
            "cybersecurity",
            "securing",
            "threats",
        ],
    },
];

// "data scientist" lands in the AI bucket here on purpose: AI courses score as
// primary and data-science courses as related for that role.
const ROLE_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::AiMl,
        triggers: &["data scientist", "ml engineer", "ai"],
    },
    CategoryRule {
        category: Category::DataScience,
        triggers: &["data analyst"],
    },
    CategoryRule {
        category: Category::FullStack,
        triggers: &["full stack", "web developer", "mern", "frontend", "backend"],
    },
    CategoryRule {
        category: Category::Testing,
        triggers: &["sdet", "test", "qa", "quality"],
    },
    CategoryRule {
        category: Category::Cybersecurity,
        triggers: &["security", "cyber"],
    },
];

const ROLE_INFERENCE_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::AiMl,
        triggers: &["ml", "ai"],
    },
    CategoryRule {
        category: Category::DataScience,
        triggers: &["data scientist", "data analyst"],
    },
    CategoryRule {
        category: Category::FullStack,
        triggers: &["full stack", "web", "frontend", "backend"],
    },
    CategoryRule {
        category: Category::Testing,
        triggers: &["sdet", "qa", "test"],
    },
    CategoryRule {
        category: Category::Cybersecurity,
        triggers: &["security", "cyber"],
    },
];

fn first_match(rules: &[CategoryRule], text: &str) -> Option<Category> {
    let lower = text.trim().to_lowercase();
    // 只有完整的哨兵值才略過；"unsure between ai and data" 仍照關鍵字分類
    if lower.is_empty() || lower == UNSURE || is_general(&lower) {
        return None;
    }

    rules
        .iter()
        .find(|rule| rule.triggers.iter().any(|trigger| lower.contains(trigger)))
        .map(|rule| rule.category)
}

/// Classifies a free-text interest.
pub fn classify(text: &str) -> Option<Category> {
    first_match(INTEREST_RULES, text)
}

/// Classifies a desired career role for role scoring.
pub fn classify_role(role: &str) -> Option<Category> {
    first_match(ROLE_RULES, role)
}

/// Total variant used to stand in for an unsure interest; defaults to data science.
pub fn infer_category_from_role(role: &str) -> Category {
    first_match(ROLE_INFERENCE_RULES, role).unwrap_or(Category::DataScience)
}
