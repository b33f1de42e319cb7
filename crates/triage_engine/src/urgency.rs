//! Urgency detection.

use crate::normalize::matched_triggers;
use crate::rules::KeywordRules;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrgencyMatch {
    pub urgent: bool,
    /// Matched urgency triggers, in trigger-list order
    pub keywords: Vec<String>,
}

pub fn detect_urgency(normalized: &str, rules: &KeywordRules) -> UrgencyMatch {
    let keywords: Vec<String> = matched_triggers(normalized, &rules.urgency)
        .into_iter()
        .map(String::from)
        .collect();
    UrgencyMatch {
        urgent: !keywords.is_empty(),
        keywords,
    }
}
