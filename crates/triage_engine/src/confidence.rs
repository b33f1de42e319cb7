//! Heuristic confidence score.
//!
//! More matched triggers give more confidence, capped at five matches.
//! Any real category gets a small boost over `Other`.

use triage_shared::ticket::BASELINE_CONFIDENCE;
use triage_shared::Category;

/// Matches at which the score saturates
pub const SATURATION_MATCHES: f64 = 5.0;

/// Score for a single match before saturation scaling
pub const MATCHED_FLOOR: f64 = 0.5;

/// Span between `MATCHED_FLOOR` and the saturated score
pub const MATCH_SPAN: f64 = 0.45;

/// Added for any category other than `Other`
pub const CATEGORY_BOOST: f64 = 0.05;

/// Estimate confidence from the category and urgency matches.
///
/// Returns exactly 0.3 when nothing matched, otherwise a value in
/// [0.59, 1.0] rounded to two decimals.
pub fn estimate_confidence(
    category_keywords: &[String],
    urgency_keywords: &[String],
    category: Category,
) -> f64 {
    let total = category_keywords.len() + urgency_keywords.len();
    if total == 0 {
        return BASELINE_CONFIDENCE;
    }

    let raw = (total as f64 / SATURATION_MATCHES).min(1.0);
    let mut base = MATCHED_FLOOR + raw * MATCH_SPAN;

    if category != Category::Other {
        base = (base + CATEGORY_BOOST).min(1.0);
    }

    round2(base)
}

/// Round half away from zero to two decimals
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
