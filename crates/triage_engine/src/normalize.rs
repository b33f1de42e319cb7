//! Text normalization and trigger lookup.

/// Lowercase the text and collapse every whitespace run to one space,
/// trimming both ends.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .split(is_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unicode whitespace plus the ASCII information separators U+001C..U+001F
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Triggers contained in `text`, in trigger-list order.
pub fn matched_triggers<'a>(text: &str, triggers: &'a [String]) -> Vec<&'a str> {
    triggers
        .iter()
        .filter(|t| text.contains(t.as_str()))
        .map(String::as_str)
        .collect()
}

/// True if any trigger is contained in `text`
pub fn contains_any(text: &str, triggers: &[String]) -> bool {
    triggers.iter().any(|t| text.contains(t.as_str()))
}
