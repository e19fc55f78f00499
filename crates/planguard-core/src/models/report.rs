//! Validation outcome types.

use serde::{Deserialize, Serialize, Serializer};

use super::{Finding, FindingKind};

/// Qualitative band for a score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoreStatus {
    #[serde(rename = "needs major improvements")]
    NeedsMajorImprovements,
    #[serde(rename = "needs some improvements")]
    NeedsSomeImprovements,
    #[serde(rename = "satisfactory")]
    Satisfactory,
    #[serde(rename = "good")]
    Good,
}

impl ScoreStatus {
    /// Band a 0-100 score.
    ///
    /// ```rust
    /// use planguard_core::models::ScoreStatus;
    ///
    /// assert_eq!(ScoreStatus::from_score(59), ScoreStatus::NeedsMajorImprovements);
    /// assert_eq!(ScoreStatus::from_score(60), ScoreStatus::NeedsSomeImprovements);
    /// assert_eq!(ScoreStatus::from_score(89), ScoreStatus::Satisfactory);
    /// assert_eq!(ScoreStatus::from_score(90), ScoreStatus::Good);
    /// ```
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=59 => ScoreStatus::NeedsMajorImprovements,
            60..=79 => ScoreStatus::NeedsSomeImprovements,
            80..=89 => ScoreStatus::Satisfactory,
            _ => ScoreStatus::Good,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreStatus::NeedsMajorImprovements => "needs major improvements",
            ScoreStatus::NeedsSomeImprovements => "needs some improvements",
            ScoreStatus::Satisfactory => "satisfactory",
            ScoreStatus::Good => "good",
        }
    }
}

/// Count of findings per kind.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Breakdown {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
}

impl Breakdown {
    /// Tally the kinds of the given findings.
    pub fn from_findings(findings: &[Finding]) -> Self {
        findings
            .iter()
            .fold(Self::default(), |mut acc, finding| {
                match finding.kind {
                    FindingKind::Passed => acc.passed += 1,
                    FindingKind::Warning => acc.warnings += 1,
                    FindingKind::Failed => acc.failed += 1,
                }
                acc
            })
    }

    pub fn total(&self) -> usize {
        self.passed + self.warnings + self.failed
    }
}

/// Score, band and a one-line description of a validation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub score: u8,
    pub status: ScoreStatus,
    pub breakdown: Breakdown,
    pub overall: String,
}

/// Urgency of a recommendation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
        }
    }
}

/// A follow-up action derived from the findings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub priority: Priority,
    pub action: String,
    pub reason: String,
}

/// Complete output of a successful validation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationReport {
    pub validations: Vec<Finding>,
    pub score: u8,
    pub summary: Summary,
    pub recommendations: Vec<Recommendation>,
}

/// Output produced when an evaluator faulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationFailure {
    pub error: String,
    pub validations: Vec<Finding>,
}

impl ValidationFailure {
    /// The fixed fallback pair reported in place of the full finding set.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            validations: vec![
                Finding::passed(
                    "basic-structure",
                    "Basic Structure",
                    "Plan has a basic structure",
                ),
                Finding::warning(
                    "limited-detail",
                    "Limited Detail",
                    "Validation detail is limited due to system limitations",
                ),
            ],
        }
    }
}

/// Result of [`crate::Validator::validate`].
///
/// Serializes as the report or failure body with a leading `success` flag.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Success(ValidationReport),
    Failure(ValidationFailure),
}

impl ValidationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success(_))
    }

    /// Findings of either variant.
    pub fn validations(&self) -> &[Finding] {
        match self {
            ValidationResult::Success(report) => &report.validations,
            ValidationResult::Failure(failure) => &failure.validations,
        }
    }

    /// The score, when the full finding set was produced.
    pub fn score(&self) -> Option<u8> {
        match self {
            ValidationResult::Success(report) => Some(report.score),
            ValidationResult::Failure(_) => None,
        }
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            ValidationResult::Success(report) => Some(report),
            ValidationResult::Failure(_) => None,
        }
    }
}

#[derive(Serialize)]
struct Flagged<'a, T> {
    success: bool,
    #[serde(flatten)]
    body: &'a T,
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValidationResult::Success(body) => Flagged {
                success: true,
                body,
            }
            .serialize(serializer),
            ValidationResult::Failure(body) => Flagged {
                success: false,
                body,
            }
            .serialize(serializer),
        }
    }
}
