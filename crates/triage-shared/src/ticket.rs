//! Ticket types shared between the triage engine and its callers.
//!
//! A submitted message becomes a `TicketRequest`; the engine turns the
//! message into an `AnalysisResult` with a category, priority, urgency flag,
//! matched keywords and a confidence score.

use crate::error::TriageError;
use serde::{Deserialize, Serialize};

/// Shortest accepted ticket message, in characters
pub const MIN_MESSAGE_CHARS: usize = 1;

/// Longest accepted ticket message, in characters
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// Confidence reported when nothing in the message matched
pub const BASELINE_CONFIDENCE: f64 = 0.3;

/// Ticket category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    Billing,
    Technical,
    Account,
    Feature,
    /// No keyword matched
    #[default]
    Other,
}

impl Category {
    /// Categories that carry keyword tables, in tie-break order.
    pub const SCORED: [Category; 4] = [
        Category::Billing,
        Category::Technical,
        Category::Account,
        Category::Feature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Billing => "Billing",
            Self::Technical => "Technical",
            Self::Account => "Account",
            Self::Feature => "Feature",
            Self::Other => "Other",
        }
    }

    /// Categories that describe a problem to fix rather than a wish.
    /// These get P2 when nothing escalates them.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Self::Billing | Self::Technical | Self::Account)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ticket priority. Declaration order is severity order, so `P0 < P3`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Priority {
    /// Critical system event (outage, breach, data loss)
    P0,
    /// Urgent issue
    P1,
    /// Normal issue
    P2,
    /// Feature request or anything else
    #[default]
    P3,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P0 => "P0",
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
        }
    }

    /// Raise priority to at least `floor`. Never lowers it.
    pub fn escalate_to(self, floor: Priority) -> Priority {
        self.min(floor)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of the triage pipeline for one message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: Category,
    pub priority: Priority,
    pub urgency: bool,
    /// Matched triggers: category matches, then urgency matches, then
    /// override triggers. No duplicates.
    pub keywords: Vec<String>,
    /// In [0.3, 1.0], two decimals
    pub confidence: f64,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            category: Category::Other,
            priority: Priority::P3,
            urgency: false,
            keywords: Vec::new(),
            confidence: BASELINE_CONFIDENCE,
        }
    }
}

impl AnalysisResult {
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Append a keyword unless it is already listed
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        if !self.keywords.iter().any(|k| k == keyword) {
            self.keywords.push(keyword.to_string());
        }
        self
    }
}

/// A ticket message submitted for analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    pub message: String,
}

impl TicketRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Check the message length bounds. Length is counted in characters,
    /// not bytes.
    pub fn validate(&self) -> Result<(), TriageError> {
        let chars = self.message.chars().count();
        if chars < MIN_MESSAGE_CHARS {
            return Err(TriageError::InvalidInput(format!(
                "message must contain at least {} character",
                MIN_MESSAGE_CHARS
            )));
        }
        if chars > MAX_MESSAGE_CHARS {
            return Err(TriageError::InvalidInput(format!(
                "message has {} characters, limit is {}",
                chars, MAX_MESSAGE_CHARS
            )));
        }
        Ok(())
    }
}
