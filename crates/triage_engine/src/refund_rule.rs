//! Refund rule - last stage of the pipeline.
//!
//! Any mention of a refund makes the ticket a Billing ticket with at least
//! P1, whatever the earlier stages decided. Confidence is left as computed
//! for the provisional result, so a ticket forced to Billing here may show
//! the confidence of the category it was originally scored as.

use crate::normalize::matched_triggers;
use crate::rules::KeywordRules;
use tracing::info;
use triage_shared::{AnalysisResult, Category, Priority};

/// Apply the refund rule to a provisional result.
///
/// Untriggered results are returned unchanged.
pub fn apply_refund_rule(
    normalized: &str,
    provisional: AnalysisResult,
    rules: &KeywordRules,
) -> AnalysisResult {
    let triggers = matched_triggers(normalized, &rules.refund_triggers);
    if triggers.is_empty() {
        return provisional;
    }

    let priority = provisional.priority.escalate_to(Priority::P1);
    info!(
        "Refund rule: {} {} -> {} {} (triggers: {:?})",
        provisional.category,
        provisional.priority,
        Category::Billing,
        priority,
        triggers
    );

    triggers.into_iter().fold(
        provisional
            .with_category(Category::Billing)
            .with_priority(priority),
        |result, trigger| result.with_keyword(trigger),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provisional(category: Category, priority: Priority, keywords: &[&str]) -> AnalysisResult {
        AnalysisResult {
            category,
            priority,
            urgency: false,
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            confidence: 0.64,
        }
    }

    fn apply(text: &str, result: AnalysisResult) -> AnalysisResult {
        apply_refund_rule(text, result, &KeywordRules::default())
    }

    #[test]
    fn test_untriggered_is_unchanged() {
        let before = provisional(Category::Technical, Priority::P2, &["bug"]);
        assert_eq!(apply("small bug", before.clone()), before);
    }

    #[test]
    fn test_forces_billing_and_p1() {
        let after = apply(
            "give me my money back",
            provisional(Category::Feature, Priority::P3, &[]),
        );
        assert_eq!(after.category, Category::Billing);
        assert_eq!(after.priority, Priority::P1);
        assert_eq!(after.keywords, vec!["money back"]);
    }

    #[test]
    fn test_keeps_p0() {
        let after = apply(
            "outage, i want a refund",
            provisional(Category::Technical, Priority::P0, &["outage"]),
        );
        assert_eq!(after.priority, Priority::P0);
        assert_eq!(after.category, Category::Billing);
    }

    #[test]
    fn test_appends_missing_triggers_in_order() {
        let after = apply(
            "refund or money back, urgent",
            provisional(Category::Billing, Priority::P1, &["refund", "urgent"]),
        );
        assert_eq!(after.keywords, vec!["refund", "urgent", "money back"]);
    }

    #[test]
    fn test_confidence_not_recalculated() {
        let after = apply("refund", provisional(Category::Other, Priority::P3, &[]));
        assert_eq!(after.confidence, 0.64);
    }
}
