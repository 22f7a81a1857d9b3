//! Keyword-based event categorization.
//!
//! This module handles:
//! - The fixed category taxonomy (labels, colors, keyword table)
//! - Scoring a title/description against the keyword table
//! - Fallback heuristics when nothing matches

pub mod keyword;
pub mod taxonomy;

// Re-export main types
pub use keyword::{classify, score_categories, CategoryScore};
pub use taxonomy::{Category, ALL_CATEGORIES, DEFAULT_CATEGORY, TAXONOMY};
