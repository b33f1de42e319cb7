//! Output formatting for analysis results.

use owo_colors::OwoColorize;
use serde::Serialize;
use triage_shared::{AnalysisResult, Priority};

/// Analyzed ticket as printed with --json
#[derive(Debug, Serialize)]
pub struct TicketReport<'a> {
    pub message: &'a str,
    #[serde(flatten)]
    pub analysis: &'a AnalysisResult,
}

pub fn render_json(message: &str, analysis: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&TicketReport { message, analysis })
}

pub fn render_human(analysis: &AnalysisResult, color: bool) -> String {
    let priority = if color {
        paint_priority(analysis.priority)
    } else {
        analysis.priority.to_string()
    };
    let keywords = if analysis.keywords.is_empty() {
        "-".to_string()
    } else {
        analysis.keywords.join(", ")
    };

    format!(
        "Category:   {}\nPriority:   {}\nUrgent:     {}\nKeywords:   {}\nConfidence: {:.2}\n",
        analysis.category,
        priority,
        if analysis.urgency { "yes" } else { "no" },
        keywords,
        analysis.confidence
    )
}

fn paint_priority(priority: Priority) -> String {
    let label = priority.as_str();
    match priority {
        Priority::P0 => label.red().bold().to_string(),
        Priority::P1 => label.yellow().bold().to_string(),
        Priority::P2 => label.cyan().to_string(),
        Priority::P3 => label.dimmed().to_string(),
    }
}
