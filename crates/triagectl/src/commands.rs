//! Command implementations for triagectl.

use crate::render::{render_human, render_json};
use anyhow::{Context, Result};
use std::io::{IsTerminal, Read, Write};
use std::path::Path;
use tracing::{debug, info};
use triage_engine::{Analyzer, KeywordRules};
use triage_shared::TicketRequest;

/// Rules from an explicit path, or the default lookup chain.
///
/// An explicit path must load; the default chain falls back to the
/// built-in tables.
pub fn load_rules(path: Option<&Path>) -> Result<KeywordRules> {
    match path {
        Some(path) => KeywordRules::load_from_path(path)
            .with_context(|| format!("Failed to load rules from {}", path.display())),
        None => Ok(KeywordRules::load()),
    }
}

/// Build the ticket request from command-line words or a reader.
pub fn read_request(words: &[String], from_stdin: bool, mut input: impl Read) -> Result<TicketRequest> {
    let message = if from_stdin {
        let mut buf = String::new();
        input
            .read_to_string(&mut buf)
            .context("Failed to read message from stdin")?;
        buf.trim_end_matches(&['\r', '\n'][..]).to_string()
    } else {
        words.join(" ")
    };

    let request = TicketRequest::new(message);
    request.validate()?;
    Ok(request)
}

/// Analyze one message and write the result to `out`.
pub fn analyze(
    request: &TicketRequest,
    rules: KeywordRules,
    json: bool,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    let analyzer = Analyzer::new(rules);
    let result = analyzer.analyze(&request.message);
    info!(
        "Analyzed ticket: {} {} (confidence {:.2})",
        result.category, result.priority, result.confidence
    );

    let text = if json {
        render_json(&request.message, &result)?
    } else {
        render_human(&result, color)
    };
    writeln!(out, "{}", text.trim_end())?;
    Ok(())
}

/// `triagectl analyze`
pub fn analyze_command(
    words: &[String],
    from_stdin: bool,
    json: bool,
    rules_path: Option<&Path>,
) -> Result<()> {
    let request = read_request(words, from_stdin, std::io::stdin().lock())?;
    debug!("Message has {} characters", request.message.chars().count());
    let rules = load_rules(rules_path)?;
    let stdout = std::io::stdout();
    let color = !json && stdout.is_terminal();
    analyze(&request, rules, json, color, &mut stdout.lock())
}

/// `triagectl rules`
pub fn rules_command(rules_path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let rules = load_rules(rules_path)?;
    write!(out, "{}", rules.to_toml_string()?)?;
    Ok(())
}

/// `triagectl check-rules`
pub fn check_rules_command(path: &Path, out: &mut impl Write) -> Result<()> {
    let rules = load_rules(Some(path))?;
    let category_keywords: usize = rules.categories.iter().map(|c| c.keywords.len()).sum();
    writeln!(
        out,
        "OK: {}: {} categories ({} keywords), {} urgency, {} p0, {} p1, {} refund triggers",
        path.display(),
        rules.categories.len(),
        category_keywords,
        rules.urgency.len(),
        rules.p0.len(),
        rules.p1.len(),
        rules.refund_triggers.len()
    )?;
    Ok(())
}
