//! Rule evaluators.
//!
//! Each evaluator is an independent pass over a [`PreparedPlan`] that
//! produces findings. The validator runs a fixed, ordered list of them:
//!
//! ```text
//! ┌─────────────┐   ┌───────────┐   ┌──────────┐   ┌──────────────┐   ┌──────┐
//! │ feasibility │ → │ resources │ → │ timeline │ → │ dependencies │ → │ risk │
//! └─────────────┘   └───────────┘   └──────────┘   └──────────────┘   └──────┘
//! ```
//!
//! No evaluator reads another's output, so the order only affects the order
//! of findings in the report.

pub mod dependencies;
pub mod feasibility;
pub mod resources;
pub mod risk;
pub mod timeline;

pub use dependencies::DependencyEvaluator;
pub use feasibility::FeasibilityEvaluator;
pub use resources::ResourceEvaluator;
pub use risk::RiskEvaluator;
pub use timeline::TimelineEvaluator;

use crate::{config::RuleSet, error::Result, models::Finding, plan::PreparedPlan};

/// A single validation pass over a plan.
pub trait Evaluator: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Produce this pass's findings.
    ///
    /// # Errors
    ///
    /// Any error aborts the whole validation run, which then reports the
    /// fallback result instead.
    fn evaluate(&self, plan: &PreparedPlan<'_>, rules: &RuleSet) -> Result<Vec<Finding>>;
}

/// The built-in evaluators in report order.
pub fn default_evaluators() -> Vec<Box<dyn Evaluator>> {
    vec![
        Box::new(FeasibilityEvaluator),
        Box::new(ResourceEvaluator),
        Box::new(TimelineEvaluator),
        Box::new(DependencyEvaluator),
        Box::new(RiskEvaluator),
    ]
}
