//! The validation entry point.
//!
//! A [`Validator`] owns the read-only [`RuleSet`] and the ordered evaluator
//! list. [`Validator::validate`] runs every evaluator over the plan, scores
//! the findings and derives recommendations:
//!
//! ```text
//! ┌──────────┐    ┌─────────────┐    ┌──────────┐    ┌─────────────────┐
//! │ Ingestor │───▶│ Evaluators  │───▶│  Scorer  │───▶│ Recommendations │
//! │  (plan)  │    │ (5 passes)  │    │ (summary)│    │                 │
//! └──────────┘    └─────────────┘    └──────────┘    └─────────────────┘
//! ```
//!
//! Validation never returns an error. If any evaluator fails, the whole
//! finding set is replaced by the fixed fallback pair and the result is
//! marked unsuccessful.
//!
//! # Usage
//!
//! ```rust
//! use planguard_core::{models::PlanStep, ValidatorBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = ValidatorBuilder::new().without_user_rules().build()?;
//!
//! let steps = vec![
//!     PlanStep::new(1, "Research")
//!         .with_description("Survey existing tools and their licensing")
//!         .with_duration("2-3 hours")
//!         .with_resources(["Analyst"]),
//!     PlanStep::new(2, "Prototype")
//!         .with_description("Build a throwaway prototype of the core flow")
//!         .with_duration("4-6 hours")
//!         .with_resources(["Developer"])
//!         .with_dependencies(vec![1]),
//! ];
//!
//! let result = validator.validate("Evaluate tooling", &steps);
//! assert!(result.is_success());
//! assert!(result.score().unwrap() <= 100);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use log::{debug, warn};

pub mod builder;

#[cfg(test)]
mod tests;

pub use builder::ValidatorBuilder;

use crate::{
    config::RuleSet,
    error::Result,
    evaluators::{default_evaluators, Evaluator},
    models::{PlanDocument, PlanStep, ValidationFailure, ValidationReport, ValidationResult},
    plan::PreparedPlan,
    recommendations::recommend,
    scoring::summarize,
};

/// Runs the evaluator pipeline over plans.
pub struct Validator {
    rules: RuleSet,
    evaluators: Vec<Box<dyn Evaluator>>,
}

impl Validator {
    /// Creates a validator from prepared parts.
    pub(crate) fn new(rules: RuleSet, evaluators: Vec<Box<dyn Evaluator>>) -> Self {
        Self { rules, evaluators }
    }

    /// The rule tables this validator consults.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Names of the evaluators, in the order they run.
    pub fn evaluator_names(&self) -> Vec<&'static str> {
        self.evaluators.iter().map(|e| e.name()).collect()
    }

    /// Validate a plan written for `task`.
    ///
    /// # Panics
    ///
    /// Panics raised inside an evaluator are not caught; only an `Err`
    /// returned from [`Evaluator::evaluate`] becomes the fallback result.
    pub fn validate(&self, task: &str, steps: &[PlanStep]) -> ValidationResult {
        match self.run(task, steps) {
            Ok(report) => {
                debug!(
                    "Validated {} steps: score {} ({} findings)",
                    steps.len(),
                    report.score,
                    report.validations.len()
                );
                ValidationResult::Success(report)
            }
            Err(e) => {
                warn!("Validation failed, reporting fallback result: {e}");
                ValidationResult::Failure(ValidationFailure::new(e.to_string()))
            }
        }
    }

    /// Validate a plan document.
    pub fn validate_document(&self, document: &PlanDocument) -> ValidationResult {
        self.validate(&document.task, &document.steps)
    }

    fn run(&self, task: &str, steps: &[PlanStep]) -> Result<ValidationReport> {
        let plan = PreparedPlan::new(steps);
        let mut validations = Vec::new();

        for evaluator in &self.evaluators {
            let findings = evaluator.evaluate(&plan, &self.rules)?;
            debug!("{} produced {} findings", evaluator.name(), findings.len());
            validations.extend(findings);
        }

        let summary = summarize(task, &validations);
        let recommendations = recommend(&validations);

        Ok(ValidationReport {
            score: summary.score,
            validations,
            summary,
            recommendations,
        })
    }
}

impl Default for Validator {
    /// Built-in rule tables and evaluators, without consulting any file.
    fn default() -> Self {
        Self::new(RuleSet::default(), default_evaluators())
    }
}
