//! Ticket triage engine - deterministic keyword classification.
//!
//! A message goes through normalization, category scoring, urgency
//! detection, priority resolution and confidence estimation, then the
//! refund rule gets the last word.

pub mod analyzer;
pub mod category;
pub mod confidence;
pub mod normalize;
pub mod priority;
pub mod refund_rule;
pub mod rules;
pub mod urgency;

pub use analyzer::{analyze, Analyzer};
pub use rules::KeywordRules;
pub use triage_shared::{AnalysisResult, Category, Priority, TriageError};
