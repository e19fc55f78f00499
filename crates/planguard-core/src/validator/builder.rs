//! Builder for creating and configuring Validator instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Validator;
use crate::{
    config::RuleSet,
    error::Result,
    evaluators::{default_evaluators, Evaluator},
};

/// Builder for creating and configuring Validator instances.
pub struct ValidatorBuilder {
    rules_path: Option<PathBuf>,
    rules: Option<RuleSet>,
    user_rules: bool,
    extra_evaluators: Vec<Box<dyn Evaluator>>,
}

impl ValidatorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            rules_path: None,
            rules: None,
            user_rules: true,
            extra_evaluators: Vec::new(),
        }
    }

    /// Sets a rule file to load instead of the user's default one.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/planguard/rules.json` or
    /// `~/.config/planguard/rules.json`, falling back to the built-in tables
    /// when that file does not exist.
    pub fn with_rules_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.rules_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given rule tables directly. Takes precedence over any path.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Skips the lookup of the user's rule file.
    pub fn without_user_rules(mut self) -> Self {
        self.user_rules = false;
        self
    }

    /// Appends an evaluator after the built-in ones.
    pub fn with_evaluator(mut self, evaluator: Box<dyn Evaluator>) -> Self {
        self.extra_evaluators.push(evaluator);
        self
    }

    /// Builds the configured validator instance.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::FileSystem` if an explicit rule file cannot
    /// be read, or `Serialization`/`InvalidInput` if a rule file is malformed.
    pub fn build(self) -> Result<Validator> {
        let rules = match (self.rules, self.rules_path) {
            (Some(rules), _) => rules,
            (None, Some(path)) => RuleSet::from_file(&path)?,
            (None, None) => Self::user_rules(self.user_rules)?,
        };

        let mut evaluators = default_evaluators();
        evaluators.extend(self.extra_evaluators);

        Ok(Validator::new(rules, evaluators))
    }

    fn user_rules(enabled: bool) -> Result<RuleSet> {
        let path = if enabled { RuleSet::default_path() } else { None };
        match path {
            Some(path) => RuleSet::from_file(&path),
            None => {
                debug!("Using built-in rule tables");
                Ok(RuleSet::default())
            }
        }
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
