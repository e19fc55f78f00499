//! Evaluation findings.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Verdict attached to a finding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    /// The aspect checked is in good shape
    Passed,

    /// The aspect checked deserves attention
    Warning,

    /// The aspect checked is broken
    Failed,
}

impl FindingKind {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::Passed => "passed",
            FindingKind::Warning => "warning",
            FindingKind::Failed => "failed",
        }
    }

    /// Weight used by the scorer.
    pub fn weight(&self) -> f64 {
        match self {
            FindingKind::Passed => 1.0,
            FindingKind::Warning => 0.5,
            FindingKind::Failed => 0.0,
        }
    }

    /// Kind with a leading icon for display.
    ///
    /// ```rust
    /// use planguard_core::models::FindingKind;
    ///
    /// assert_eq!(FindingKind::Passed.with_icon(), "✓ Passed");
    /// assert_eq!(FindingKind::Warning.with_icon(), "⚠ Warning");
    /// assert_eq!(FindingKind::Failed.with_icon(), "✗ Failed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            FindingKind::Passed => "✓ Passed",
            FindingKind::Warning => "⚠ Warning",
            FindingKind::Failed => "✗ Failed",
        }
    }
}

/// One evaluator's verdict on some aspect of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Finding {
    /// Stable key, unique within the producing evaluator
    pub id: String,

    /// Verdict
    #[serde(rename = "type")]
    pub kind: FindingKind,

    /// Short heading
    pub title: String,

    /// Explanation of the verdict
    pub message: String,

    /// Evaluator-specific payload (counts, lists, recommendation text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl Finding {
    /// Create a finding without details.
    pub fn new(
        kind: FindingKind,
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Shorthand for a passed finding.
    pub fn passed(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(FindingKind::Passed, id, title, message)
    }

    /// Shorthand for a warning finding.
    pub fn warning(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(FindingKind::Warning, id, title, message)
    }

    /// Shorthand for a failed finding.
    pub fn failed(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(FindingKind::Failed, id, title, message)
    }

    /// Attach a serializable details payload.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Serialization` if `details` cannot be
    /// represented as JSON.
    pub fn with_details<T: Serialize + ?Sized>(mut self, details: &T) -> Result<Self> {
        self.details = Some(serde_json::to_value(details)?);
        Ok(self)
    }

    /// Whether the finding is a warning.
    pub fn is_warning(&self) -> bool {
        self.kind == FindingKind::Warning
    }

    /// Whether the finding is a failure.
    pub fn is_failed(&self) -> bool {
        self.kind == FindingKind::Failed
    }
}
