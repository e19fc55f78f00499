//! Per-step feasibility checks and the overall feasibility ratio.

use serde_json::json;

use super::Evaluator;
use crate::{
    config::RuleSet,
    error::Result,
    models::Finding,
    plan::{PreparedPlan, PreparedStep},
};

/// Descriptions must be longer than this many characters.
const MIN_DESCRIPTION_CHARS: usize = 20;

/// Checks each step for an hour-based duration, assigned resources and a
/// meaningful description.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeasibilityEvaluator;

/// Criteria a step fails, in a fixed order. Empty means feasible.
pub fn feasibility_issues(step: &PreparedStep<'_>) -> Vec<&'static str> {
    let mut issues = Vec::new();
    if !step.step.duration.to_lowercase().contains("hour") {
        issues.push("duration is not expressed in hours");
    }
    if step.step.resources.is_empty() {
        issues.push("no resources assigned");
    }
    if step.step.description.chars().count() <= MIN_DESCRIPTION_CHARS {
        issues.push("description is too brief");
    }
    issues
}

impl Evaluator for FeasibilityEvaluator {
    fn name(&self) -> &'static str {
        "feasibility"
    }

    fn evaluate(&self, plan: &PreparedPlan<'_>, _rules: &RuleSet) -> Result<Vec<Finding>> {
        let mut findings = Vec::with_capacity(plan.len() + 1);
        let mut feasible = 0usize;

        for step in plan {
            let id = format!("feasibility-step-{}", step.step.id);
            let title = format!("Step {} Feasibility", step.position);
            let issues = feasibility_issues(step);

            if issues.is_empty() {
                feasible += 1;
                findings.push(Finding::passed(
                    id,
                    title,
                    format!("'{}' is well defined and feasible", step.step.title),
                ));
            } else {
                findings.push(
                    Finding::warning(
                        id,
                        title,
                        format!("'{}' may not be feasible: {}", step.step.title, issues.join(", ")),
                    )
                    .with_details(&json!({ "issues": issues }))?,
                );
            }
        }

        findings.push(overall_finding(feasible, plan.len())?);
        Ok(findings)
    }
}

fn overall_finding(feasible: usize, total: usize) -> Result<Finding> {
    const ID: &str = "feasibility-overall";
    const TITLE: &str = "Overall Feasibility";

    if total == 0 {
        return Ok(Finding::failed(ID, TITLE, "The plan has no steps to evaluate"));
    }

    let percentage = (feasible as f64 * 100.0 / total as f64).round() as u32;
    let message = format!("{feasible} of {total} steps ({percentage}%) are feasible");
    let finding = match percentage {
        80.. => Finding::passed(ID, TITLE, message),
        50..=79 => Finding::warning(ID, TITLE, message),
        _ => Finding::failed(ID, TITLE, message),
    };

    finding.with_details(&json!({
        "feasibleSteps": feasible,
        "totalSteps": total,
        "percentage": percentage,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FindingKind, PlanStep};

    fn feasible_step(id: u64) -> PlanStep {
        PlanStep::new(id, format!("Step {id}"))
            .with_description("A sufficiently detailed description")
            .with_duration("1-2 hours")
            .with_resources(["Developer"])
    }

    fn run(steps: &[PlanStep]) -> Vec<Finding> {
        FeasibilityEvaluator
            .evaluate(&PreparedPlan::new(steps), &RuleSet::default())
            .unwrap()
    }

    #[test]
    fn test_feasible_step_passes() {
        let findings = run(&[feasible_step(1)]);

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].kind, FindingKind::Passed);
        assert_eq!(findings[1].id, "feasibility-overall");
        assert_eq!(findings[1].kind, FindingKind::Passed);
        assert_eq!(findings[1].details.as_ref().unwrap()["percentage"], 100);
    }

    #[test]
    fn test_each_criterion_reported() {
        let findings = run(&[PlanStep::new(1, "Vague").with_description("short")]);

        assert_eq!(findings[0].kind, FindingKind::Warning);
        let issues = findings[0].details.as_ref().unwrap()["issues"].as_array().unwrap();
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn test_description_must_exceed_twenty_chars() {
        let exactly_twenty = feasible_step(1).with_description("x".repeat(20));
        let twenty_one = feasible_step(2).with_description("x".repeat(21));
        let findings = run(&[exactly_twenty, twenty_one]);

        assert_eq!(findings[0].kind, FindingKind::Warning);
        assert_eq!(findings[1].kind, FindingKind::Passed);
    }

    #[test]
    fn test_overall_bands() {
        let half = run(&[feasible_step(1), PlanStep::new(2, "Empty")]);
        assert_eq!(half.last().unwrap().kind, FindingKind::Warning);

        let none = run(&[PlanStep::new(1, "Empty"), PlanStep::new(2, "Empty")]);
        assert_eq!(none.last().unwrap().kind, FindingKind::Failed);
    }

    #[test]
    fn test_empty_plan_overall_failed() {
        let findings = run(&[]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::Failed);
    }
}
