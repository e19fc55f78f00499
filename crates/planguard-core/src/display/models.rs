//! Display implementations for domain models.

use std::fmt;

use super::{Findings, Recommendations};
use crate::models::{
    Finding, FindingKind, Priority, Recommendation, ScoreStatus, ValidationFailure,
    ValidationReport, ValidationResult,
};

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} **{}**: {}", self.kind.with_icon(), self.title, self.message)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- [{}] **{}**: {}", self.priority, self.action, self.reason)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let breakdown = &self.summary.breakdown;

        writeln!(f, "# Validation Report")?;
        writeln!(f)?;
        writeln!(f, "- Score: {}/100 ({})", self.score, self.summary.status)?;
        writeln!(
            f,
            "- Passed: {}, Warnings: {}, Failed: {}",
            breakdown.passed, breakdown.warnings, breakdown.failed
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.summary.overall)?;

        writeln!(f, "\n## Findings")?;
        writeln!(f)?;
        write!(f, "{}", Findings(&self.validations))?;

        writeln!(f, "\n## Recommendations")?;
        writeln!(f)?;
        write!(f, "{}", Recommendations(&self.recommendations))
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Validation Report")?;
        writeln!(f)?;
        writeln!(f, "Validation could not complete: {}", self.error)?;
        writeln!(f, "\n## Findings")?;
        writeln!(f)?;
        write!(f, "{}", Findings(&self.validations))
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationResult::Success(report) => write!(f, "{report}"),
            ValidationResult::Failure(failure) => write!(f, "{failure}"),
        }
    }
}
