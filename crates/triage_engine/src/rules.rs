//! Keyword rule tables.
//!
//! Built-in tables are used unless a TOML rules file is found at
//! $TRIAGE_RULES or /etc/triage/rules.toml. Category order in the table is
//! the tie-break order, so categories are kept as a list, not a map.

use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use triage_shared::{Category, TriageError};

/// Rules file path
pub const RULES_PATH: &str = "/etc/triage/rules.toml";

/// Environment variable overriding the rules file path
pub const RULES_ENV: &str = "TRIAGE_RULES";

/// Triggers for one category, in declared order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryKeywords {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// All trigger tables used by the pipeline.
///
/// Plain lists come before `categories` so the TOML form keeps its
/// array-of-tables last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRules {
    /// Urgency triggers
    #[serde(default = "default_urgency")]
    pub urgency: Vec<String>,

    /// Triggers that force P0
    #[serde(default = "default_p0")]
    pub p0: Vec<String>,

    /// Triggers that force P1 (on top of urgency)
    #[serde(default = "default_p1")]
    pub p1: Vec<String>,

    /// Triggers for the refund rule (forces Billing, at least P1)
    #[serde(default = "default_refund_triggers")]
    pub refund_triggers: Vec<String>,

    /// Category tables in tie-break order
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryKeywords>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_urgency() -> Vec<String> {
    strings(&[
        "urgent",
        "asap",
        "immediately",
        "down",
        "critical",
        "emergency",
        "right now",
        "escalate",
        "blocked",
    ])
}

fn default_p0() -> Vec<String> {
    strings(&["system down", "security breach", "data loss", "outage"])
}

fn default_p1() -> Vec<String> {
    strings(&["urgent", "critical", "immediately", "asap"])
}

fn default_refund_triggers() -> Vec<String> {
    strings(&["refund", "money back"])
}

/// Declared trigger lists, aligned with `Category::SCORED`
const CATEGORY_TRIGGERS: [&[&str]; 4] = [
    &[
        "payment",
        "refund",
        "invoice",
        "charge",
        "billing",
        "money back",
        "subscription",
        "pricing",
        "receipt",
    ],
    &[
        "error",
        "bug",
        "crash",
        "not working",
        "broken",
        "failed",
        "glitch",
        "outage",
        "slow",
        "timeout",
        "exception",
    ],
    &[
        "login",
        "password",
        "account locked",
        "account",
        "sign in",
        "signup",
        "register",
        "locked out",
        "two factor",
        "2fa",
        "authentication",
    ],
    &[
        "request",
        "feature",
        "add option",
        "enhancement",
        "suggestion",
        "wishlist",
        "improve",
        "would like",
    ],
];

fn default_categories() -> Vec<CategoryKeywords> {
    Category::SCORED
        .iter()
        .zip(CATEGORY_TRIGGERS)
        .map(|(&category, keywords)| CategoryKeywords {
            category,
            keywords: strings(keywords),
        })
        .collect()
}

impl Default for KeywordRules {
    fn default() -> Self {
        Self {
            urgency: default_urgency(),
            p0: default_p0(),
            p1: default_p1(),
            refund_triggers: default_refund_triggers(),
            categories: default_categories(),
        }
    }
}

impl KeywordRules {
    /// Load rules from $TRIAGE_RULES, then /etc/triage/rules.toml, else
    /// the built-in tables.
    pub fn load() -> Self {
        let env_path = std::env::var(RULES_ENV).ok();
        Self::load_chain(env_path.as_deref(), Path::new(RULES_PATH))
    }

    fn load_chain(env_path: Option<&str>, system_path: &Path) -> Self {
        env_path
            .ok_or_else(|| TriageError::Rules(format!("{} not set", RULES_ENV)))
            .and_then(|path| Self::load_from_path(path))
            .or_else(|e| {
                if let Some(path) = env_path {
                    warn!("Rules not loaded from {}: {}", path, e);
                }
                Self::load_from_path(system_path)
            })
            .unwrap_or_else(|e| {
                warn!("Rules not loaded, using built-in tables: {}", e);
                KeywordRules::default()
            })
    }

    /// Load and validate rules from a specific path
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, TriageError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let rules = Self::from_toml_str(&content)?;
        info!("Loaded rules from {}", path.display());
        Ok(rules)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, TriageError> {
        let rules: KeywordRules = toml::from_str(content)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn to_toml_string(&self) -> Result<String, TriageError> {
        toml::to_string_pretty(self).map_err(|e| TriageError::Rules(e.to_string()))
    }

    /// Reject tables the pipeline cannot use faithfully.
    pub fn validate(&self) -> Result<(), TriageError> {
        let mut seen = HashSet::new();
        for entry in &self.categories {
            if entry.category == Category::Other {
                return Err(TriageError::Rules(
                    "Other is the fallback category and takes no keywords".to_string(),
                ));
            }
            if !seen.insert(entry.category) {
                return Err(TriageError::Rules(format!(
                    "category {} is listed more than once",
                    entry.category
                )));
            }
            if entry.keywords.is_empty() {
                return Err(TriageError::Rules(format!(
                    "category {} has no keywords",
                    entry.category
                )));
            }
            check_triggers(entry.category.as_str(), &entry.keywords)?;
        }

        check_triggers("urgency", &self.urgency)?;
        check_triggers("p0", &self.p0)?;
        check_triggers("p1", &self.p1)?;
        check_triggers("refund_triggers", &self.refund_triggers)?;
        Ok(())
    }
}

/// Triggers are matched against normalized text, so a trigger that is not
/// itself normalized could never match.
fn check_triggers(table: &str, triggers: &[String]) -> Result<(), TriageError> {
    for trigger in triggers {
        if trigger.is_empty() {
            return Err(TriageError::Rules(format!("{}: empty trigger", table)));
        }
        if normalize(trigger) != *trigger {
            return Err(TriageError::Rules(format!(
                "{}: trigger {:?} must be lowercase with single spaces",
                table, trigger
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_valid() {
        assert!(KeywordRules::default().validate().is_ok());
    }

    #[test]
    fn test_default_category_order() {
        let order: Vec<Category> = KeywordRules::default()
            .categories
            .iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(
            order,
            vec![
                Category::Billing,
                Category::Technical,
                Category::Account,
                Category::Feature
            ]
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let rules = KeywordRules::from_toml_str("urgency = [\"now\"]\n").unwrap();
        assert_eq!(rules.urgency, vec!["now"]);
        assert_eq!(rules.p0, default_p0());
        assert_eq!(rules.categories.len(), 4);
    }

    #[test]
    fn test_toml_roundtrip_preserves_order() {
        let rules = KeywordRules::default();
        let text = rules.to_toml_string().unwrap();
        let back = KeywordRules::from_toml_str(&text).unwrap();
        assert_eq!(back, rules);
    }

    #[test]
    fn test_rejects_other_category() {
        let text = r#"
[[categories]]
category = "Other"
keywords = ["misc"]
"#;
        let err = KeywordRules::from_toml_str(text).unwrap_err();
        assert!(matches!(err, TriageError::Rules(_)));
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let text = r#"
[[categories]]
category = "Billing"
keywords = ["payment"]

[[categories]]
category = "Billing"
keywords = ["invoice"]
"#;
        assert!(KeywordRules::from_toml_str(text).is_err());
    }

    #[test]
    fn test_rejects_unnormalized_trigger() {
        let text = "p0 = [\"System Down\"]\n";
        let err = KeywordRules::from_toml_str(text).unwrap_err();
        assert!(err.to_string().contains("System Down"));
    }

    #[test]
    fn test_rejects_empty_trigger() {
        assert!(KeywordRules::from_toml_str("p1 = [\"\"]\n").is_err());
    }

    #[test]
    fn test_malformed_toml_is_toml_error() {
        let err = KeywordRules::from_toml_str("urgency = [").unwrap_err();
        assert!(matches!(err, TriageError::Toml(_)));
    }

    fn write_rules(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_chain_prefers_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let env = write_rules(dir.path(), "env.toml", "p0 = [\"fire\"]\n");
        let system = write_rules(dir.path(), "system.toml", "p0 = [\"flood\"]\n");

        let rules = KeywordRules::load_chain(env.to_str(), &system);
        assert_eq!(rules.p0, vec!["fire"]);
    }

    #[test]
    fn test_load_chain_missing_env_file_falls_to_system() {
        let dir = tempfile::tempdir().unwrap();
        let system = write_rules(dir.path(), "system.toml", "p0 = [\"flood\"]\n");
        let missing = dir.path().join("missing.toml");

        let rules = KeywordRules::load_chain(missing.to_str(), &system);
        assert_eq!(rules.p0, vec!["flood"]);
    }

    #[test]
    fn test_load_chain_invalid_env_file_falls_to_system() {
        let dir = tempfile::tempdir().unwrap();
        let env = write_rules(dir.path(), "env.toml", "p0 = [\"FIRE\"]\n");
        let system = write_rules(dir.path(), "system.toml", "p0 = [\"flood\"]\n");

        let rules = KeywordRules::load_chain(env.to_str(), &system);
        assert_eq!(rules.p0, vec!["flood"]);
    }

    #[test]
    fn test_load_chain_unset_env_reads_system() {
        let dir = tempfile::tempdir().unwrap();
        let system = write_rules(dir.path(), "system.toml", "p0 = [\"flood\"]\n");

        let rules = KeywordRules::load_chain(None, &system);
        assert_eq!(rules.p0, vec!["flood"]);
    }

    #[test]
    fn test_load_chain_nothing_readable_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let rules = KeywordRules::load_chain(missing.to_str(), &dir.path().join("also-missing.toml"));
        assert_eq!(rules, KeywordRules::default());
    }
}
