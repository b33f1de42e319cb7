//! Triage pipeline entry point.
//!
//! normalize -> category -> urgency -> priority -> confidence -> refund rule

use crate::category::score_category;
use crate::confidence::estimate_confidence;
use crate::normalize::normalize;
use crate::priority::resolve_priority;
use crate::refund_rule::apply_refund_rule;
use crate::rules::KeywordRules;
use crate::urgency::detect_urgency;
use once_cell::sync::Lazy;
use tracing::debug;
use triage_shared::AnalysisResult;

/// Built-in rule tables, shared read-only by `analyze`
static BUILTIN_RULES: Lazy<KeywordRules> = Lazy::new(KeywordRules::default);

/// Analyze a message with the built-in rules
pub fn analyze(message: &str) -> AnalysisResult {
    run_pipeline(message, &BUILTIN_RULES)
}

/// Pipeline bound to a set of keyword rules
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    rules: KeywordRules,
}

impl Analyzer {
    pub fn new(rules: KeywordRules) -> Self {
        Self { rules }
    }

    pub fn analyze(&self, message: &str) -> AnalysisResult {
        run_pipeline(message, &self.rules)
    }
}

fn run_pipeline(message: &str, rules: &KeywordRules) -> AnalysisResult {
    let text = normalize(message);

    let category = score_category(&text, rules);
    debug!(
        "Category: {} (hits: {:?})",
        category.category, category.keywords
    );

    let urgency = detect_urgency(&text, rules);
    debug!("Urgency: {} (hits: {:?})", urgency.urgent, urgency.keywords);

    let priority = resolve_priority(&text, category.category, urgency.urgent, rules);
    let confidence = estimate_confidence(&category.keywords, &urgency.keywords, category.category);
    debug!("Priority: {}, confidence: {:.2}", priority, confidence);

    let provisional = category
        .keywords
        .iter()
        .chain(urgency.keywords.iter())
        .fold(
            AnalysisResult {
                category: category.category,
                priority,
                urgency: urgency.urgent,
                keywords: Vec::new(),
                confidence,
            },
            |result, keyword| result.with_keyword(keyword),
        );

    apply_refund_rule(&text, provisional, rules)
}
