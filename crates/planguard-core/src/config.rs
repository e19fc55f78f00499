//! Keyword tables consulted by the evaluators.
//!
//! A [`RuleSet`] is built once when the validator is constructed and only
//! ever read afterwards. The built-in tables can be overridden by a JSON file
//! in which every field is optional:
//!
//! ```json
//! {
//!   "high_risk": ["tight timeline", "vendor lock-in"],
//!   "critical_resources": ["licensed", "on-call"]
//! }
//! ```
//!
//! Fields left out keep their defaults. Keywords are matched as
//! case-insensitive substrings and are stored lower-cased.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// File name looked up under the XDG config directory.
pub const RULES_FILE_NAME: &str = "rules.json";

/// Read-only keyword tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuleSet {
    /// Phrases that mark a step as high risk
    pub high_risk: Vec<String>,

    /// Phrases that mark a step as medium risk
    pub medium_risk: Vec<String>,

    /// Description phrases showing that a step plans for failure
    pub mitigation: Vec<String>,

    /// Resource name fragments that denote scarce resources
    pub critical_resources: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            high_risk: owned(&[
                "tight timeline",
                "complex dependencies",
                "unknown technology",
                "limited resources",
                "multiple stakeholders",
            ]),
            medium_risk: owned(&[
                "moderate complexity",
                "some dependencies",
                "limited expertise",
                "budget constraints",
            ]),
            mitigation: owned(&[
                "backup",
                "contingency",
                "fallback",
                "alternative",
                "mitigat",
                "rollback",
                "redundan",
            ]),
            critical_resources: owned(&[
                "specialized",
                "expert",
                "licensed",
                "premium",
                "custom",
                "rare",
            ]),
        }
    }
}

impl RuleSet {
    /// Parse a rule set from JSON, filling absent tables with defaults.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Serialization` for malformed JSON,
    /// `ValidationError::InvalidInput` if any keyword is blank, and
    /// `ValidationError::Configuration` if a phrase appears in both risk
    /// tables after normalization.
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: RuleSet = serde_json::from_str(json)?;
        rules.normalized()
    }

    /// Load a rule set from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::FileSystem` if the file cannot be read, plus
    /// the errors of [`RuleSet::from_json`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| ValidationError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!("Loading rule tables from {}", path.display());
        Self::from_json(&json)
    }

    /// Location of the user's rule file, if one exists.
    ///
    /// Follows the XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/planguard/rules.json` or
    /// `~/.config/planguard/rules.json`.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("planguard").find_config_file(RULES_FILE_NAME)
    }

    fn normalized(self) -> Result<Self> {
        let rules = Self {
            high_risk: normalize_table("high_risk", self.high_risk)?,
            medium_risk: normalize_table("medium_risk", self.medium_risk)?,
            mitigation: normalize_table("mitigation", self.mitigation)?,
            critical_resources: normalize_table("critical_resources", self.critical_resources)?,
        };

        // A phrase can only carry one risk level
        if let Some(word) = rules
            .high_risk
            .iter()
            .find(|word| rules.medium_risk.contains(word))
        {
            return Err(ValidationError::Configuration {
                message: format!("'{word}' is listed as both a high and a medium risk"),
            });
        }

        Ok(rules)
    }
}

fn normalize_table(field: &str, words: Vec<String>) -> Result<Vec<String>> {
    words
        .into_iter()
        .map(|word| {
            let word = word.trim().to_lowercase();
            if word.is_empty() {
                Err(ValidationError::invalid_input(field).with_reason("keywords must not be blank"))
            } else {
                Ok(word)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let rules = RuleSet::from_json(r#"{ "high_risk": ["Vendor Lock-In"] }"#).unwrap();

        assert_eq!(rules.high_risk, vec!["vendor lock-in"]);
        assert_eq!(rules.medium_risk, RuleSet::default().medium_risk);
        assert_eq!(rules.critical_resources, RuleSet::default().critical_resources);
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let err = RuleSet::from_json(r#"{ "mitigation": ["backup", "  "] }"#).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidInput { ref field, .. } if field == "mitigation"));
    }

    #[test]
    fn test_keyword_in_both_risk_levels_rejected() {
        let err = RuleSet::from_json(
            r#"{ "high_risk": ["Budget Constraints"], "medium_risk": ["budget constraints"] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::Configuration { ref message } if message.contains("budget constraints")));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = RuleSet::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ValidationError::Serialization { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "critical_resources": ["GPU"] }}"#).unwrap();

        let rules = RuleSet::from_file(file.path()).unwrap();
        assert_eq!(rules.critical_resources, vec!["gpu"]);
    }

    #[test]
    fn test_missing_file_is_filesystem_error() {
        let err = RuleSet::from_file(Path::new("/nonexistent/planguard/rules.json")).unwrap_err();
        assert!(matches!(err, ValidationError::FileSystem { .. }));
    }
}
