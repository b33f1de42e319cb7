//! Category scoring by keyword hit count.

use crate::normalize::matched_triggers;
use crate::rules::KeywordRules;
use triage_shared::Category;

/// Winning category and its matched triggers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatch {
    pub category: Category,
    /// Matched triggers of the winning category, in declared order
    pub keywords: Vec<String>,
}

impl CategoryMatch {
    fn other() -> Self {
        Self {
            category: Category::Other,
            keywords: Vec::new(),
        }
    }
}

/// Pick the category with the most distinct trigger hits.
///
/// Each trigger counts once however often it occurs. Ties go to the
/// category listed first in the rules. No hits at all gives `Other`.
pub fn score_category(normalized: &str, rules: &KeywordRules) -> CategoryMatch {
    let mut best: Option<(Category, Vec<&str>)> = None;

    for entry in &rules.categories {
        let hits = matched_triggers(normalized, &entry.keywords);
        if hits.is_empty() {
            continue;
        }
        // Strictly greater, so an earlier category keeps a tie
        let better = match &best {
            Some((_, best_hits)) => hits.len() > best_hits.len(),
            None => true,
        };
        if better {
            best = Some((entry.category, hits));
        }
    }

    match best {
        Some((category, hits)) => CategoryMatch {
            category,
            keywords: hits.into_iter().map(String::from).collect(),
        },
        None => CategoryMatch::other(),
    }
}
