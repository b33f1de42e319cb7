//! Priority resolution.
//!
//! Fixed precedence, first match wins:
//! - P0: critical system event in the text
//! - P1: urgent, or a P1 trigger in the text
//! - P2: actionable category (Billing, Technical, Account)
//! - P3: everything else

use crate::normalize::contains_any;
use crate::rules::KeywordRules;
use triage_shared::{Category, Priority};

pub fn resolve_priority(
    normalized: &str,
    category: Category,
    urgent: bool,
    rules: &KeywordRules,
) -> Priority {
    if contains_any(normalized, &rules.p0) {
        return Priority::P0;
    }

    if urgent || contains_any(normalized, &rules.p1) {
        return Priority::P1;
    }

    if category.is_actionable() {
        return Priority::P2;
    }

    Priority::P3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str, category: Category, urgent: bool) -> Priority {
        resolve_priority(text, category, urgent, &KeywordRules::default())
    }

    #[test]
    fn test_p0_system_down() {
        assert_eq!(resolve("system down, nothing works", Category::Technical, true), Priority::P0);
    }

    #[test]
    fn test_p0_security_breach() {
        assert_eq!(resolve("security breach detected", Category::Technical, false), Priority::P0);
    }

    #[test]
    fn test_p0_ignores_category() {
        assert_eq!(resolve("outage reported", Category::Other, false), Priority::P0);
        assert_eq!(resolve("some data loss", Category::Feature, false), Priority::P0);
    }

    #[test]
    fn test_p1_urgent_flag() {
        assert_eq!(resolve("please fix this", Category::Technical, true), Priority::P1);
    }

    #[test]
    fn test_p1_trigger_without_flag() {
        assert_eq!(resolve("critical", Category::Feature, false), Priority::P1);
    }

    #[test]
    fn test_p2_actionable() {
        assert_eq!(resolve("invoice question", Category::Billing, false), Priority::P2);
        assert_eq!(resolve("small bug in settings", Category::Technical, false), Priority::P2);
        assert_eq!(resolve("password reset", Category::Account, false), Priority::P2);
    }

    #[test]
    fn test_p3_fallback() {
        assert_eq!(resolve("can you add dark mode", Category::Feature, false), Priority::P3);
        assert_eq!(resolve("hello world", Category::Other, false), Priority::P3);
    }
}
