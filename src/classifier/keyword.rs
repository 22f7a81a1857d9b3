//! Keyword-scoring classifier.
//!
//! Scoring is plain substring presence over the lowercased
//! `title + " " + description`. No tokenization or word boundaries, so
//! "war" also matches "warranty".

use super::taxonomy::{Category, DEFAULT_CATEGORY, TAXONOMY};
use crate::utils::config::FINANCE_FALLBACK_TERMS;
use log::debug;

/// Score for a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScore {
    pub category: Category,

    /// Number of distinct keywords present in the text
    pub score: usize,
}

/// Classify an event from its title and description
///
/// **Public** - main entry point for classification
///
/// # Algorithm
/// 1. Score every taxonomy category by keyword presence
/// 2. Pick the strictly highest score; ties go to the earlier category
/// 3. With no match at all, fall back to Economy & Finance when a finance
///    term is present, otherwise to Politics & Policy
pub fn classify(title: &str, description: &str) -> Category {
    let text = combined_text(title, description);
    let scores = score_text(&text);

    let mut best = DEFAULT_CATEGORY;
    let mut max_score = 0;
    for entry in &scores {
        if entry.score > max_score {
            max_score = entry.score;
            best = entry.category;
        }
    }

    if max_score == 0 {
        let category = fallback_category(&text);
        debug!("No keyword match for {:?}, falling back to {}", title, category);
        return category;
    }

    best
}

/// Per-category scores in taxonomy order
///
/// **Public** - diagnostics for the `classify --scores` command
pub fn score_categories(title: &str, description: &str) -> Vec<CategoryScore> {
    score_text(&combined_text(title, description))
}

/// **Private** - lowercased concatenation used for matching
fn combined_text(title: &str, description: &str) -> String {
    format!("{} {}", title, description).to_lowercase()
}

/// **Private** - score already-lowercased text
fn score_text(text: &str) -> Vec<CategoryScore> {
    TAXONOMY
        .iter()
        .map(|category| CategoryScore {
            category: *category,
            score: category
                .keywords()
                .iter()
                .filter(|keyword| text.contains(*keyword))
                .count(),
        })
        .collect()
}

/// **Private** - secondary heuristic when no keyword matched
fn fallback_category(text: &str) -> Category {
    if FINANCE_FALLBACK_TERMS.iter().any(|term| text.contains(term)) {
        Category::EconomyFinance
    } else {
        DEFAULT_CATEGORY
    }
}
