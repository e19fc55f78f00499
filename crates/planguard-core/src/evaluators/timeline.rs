//! Total duration estimate and adjacent-step balance.

use serde::Serialize;
use serde_json::json;

use super::Evaluator;
use crate::{config::RuleSet, error::Result, models::Finding, plan::PreparedPlan};

const HOURS_PER_DAY: f64 = 8.0;
const HOURS_PER_WEEK: f64 = 40.0;
/// Totals above this many hours (four weeks) are flagged.
pub const MAX_TOTAL_HOURS: f64 = 4.0 * HOURS_PER_WEEK;
/// Plans with more steps than this are flagged.
pub const MAX_STEPS: usize = 10;
/// Adjacent steps whose midpoints differ by more than this are unbalanced.
pub const MAX_ADJACENT_DIFFERENCE_HOURS: f64 = 4.0;

/// Sums step durations and looks for abrupt changes in step size.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineEvaluator;

/// Render an hour total in the largest fitting unit.
///
/// ```rust
/// use planguard_core::evaluators::timeline::format_duration;
///
/// assert_eq!(format_duration(5.0), "5 hours");
/// assert_eq!(format_duration(12.0), "1.5 days");
/// assert_eq!(format_duration(100.0), "2.5 weeks");
/// ```
pub fn format_duration(hours: f64) -> String {
    if hours <= HOURS_PER_DAY {
        format!("{} hours", trim_number(hours))
    } else if hours <= HOURS_PER_WEEK {
        format!("{} days", trim_number(hours / HOURS_PER_DAY))
    } else {
        format!("{} weeks", trim_number(hours / HOURS_PER_WEEK))
    }
}

fn trim_number(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

/// A step whose duration jumps sharply from its predecessor's.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnbalancedStep {
    pub step: usize,
    pub title: String,
    pub hours: f64,
    pub previous_hours: f64,
}

/// Steps whose midpoint differs from the preceding step's by more than
/// [`MAX_ADJACENT_DIFFERENCE_HOURS`].
pub fn unbalanced_steps(plan: &PreparedPlan<'_>) -> Vec<UnbalancedStep> {
    let steps: Vec<_> = plan.iter().collect();
    steps
        .windows(2)
        .filter(|pair| (pair[1].midpoint - pair[0].midpoint).abs() > MAX_ADJACENT_DIFFERENCE_HOURS)
        .map(|pair| UnbalancedStep {
            step: pair[1].position,
            title: pair[1].step.title.clone(),
            hours: pair[1].midpoint,
            previous_hours: pair[0].midpoint,
        })
        .collect()
}

impl Evaluator for TimelineEvaluator {
    fn name(&self) -> &'static str {
        "timeline"
    }

    fn evaluate(&self, plan: &PreparedPlan<'_>, _rules: &RuleSet) -> Result<Vec<Finding>> {
        let total_hours = plan.total_hours();
        let estimate = format_duration(total_hours);
        let step_count = plan.len();

        let mut concerns = Vec::new();
        if total_hours > MAX_TOTAL_HOURS {
            concerns.push("total duration exceeds 4 weeks");
        }
        if step_count > MAX_STEPS {
            concerns.push("more than 10 steps");
        }

        let estimate_finding = if concerns.is_empty() {
            Finding::passed(
                "timeline-estimate",
                "Timeline Estimate",
                format!("Estimated total duration is {estimate} across {step_count} steps"),
            )
        } else {
            Finding::warning(
                "timeline-estimate",
                "Timeline Estimate",
                format!(
                    "Estimated total duration is {estimate} across {step_count} steps: {}",
                    concerns.join(", ")
                ),
            )
        }
        .with_details(&json!({
            "totalHours": total_hours,
            "estimate": estimate,
            "stepCount": step_count,
            "recommendation": (!concerns.is_empty())
                .then_some("Split the plan into phases or trim scope"),
        }))?;

        let mut findings = vec![estimate_finding];

        let unbalanced = unbalanced_steps(plan);
        if !unbalanced.is_empty() {
            let positions: Vec<String> = unbalanced.iter().map(|u| u.step.to_string()).collect();
            findings.push(
                Finding::warning(
                    "timeline-balance",
                    "Timeline Balance",
                    format!(
                        "Step durations change abruptly at step(s) {}",
                        positions.join(", ")
                    ),
                )
                .with_details(&json!({
                    "steps": unbalanced,
                    "recommendation": "Break large steps down so effort is spread evenly",
                }))?,
            );
        }

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FindingKind, PlanStep};

    fn timed(id: u64, duration: &str) -> PlanStep {
        PlanStep::new(id, format!("Step {id}")).with_duration(duration)
    }

    fn run(steps: &[PlanStep]) -> Vec<Finding> {
        TimelineEvaluator
            .evaluate(&PreparedPlan::new(steps), &RuleSet::default())
            .unwrap()
    }

    #[test]
    fn test_durations_sum_to_five_hours() {
        let findings = run(&[timed(1, "1-2 hours"), timed(2, "3-4 hours")]);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::Passed);
        assert_eq!(findings[0].details.as_ref().unwrap()["estimate"], "5 hours");
        assert_eq!(findings[0].details.as_ref().unwrap()["totalHours"], 5.0);
    }

    #[test]
    fn test_unparsable_durations_default_to_two_hours() {
        let findings = run(&[timed(1, "unknown"), timed(2, "")]);
        assert_eq!(findings[0].details.as_ref().unwrap()["estimate"], "4 hours");
    }

    #[test]
    fn test_format_duration_buckets() {
        assert_eq!(format_duration(0.0), "0 hours");
        assert_eq!(format_duration(8.0), "8 hours");
        assert_eq!(format_duration(40.0), "5 days");
        assert_eq!(format_duration(160.0), "4 weeks");
    }

    #[test]
    fn test_long_timeline_warns() {
        let findings = run(&[timed(1, "100-120 hours"), timed(2, "50-70 hours")]);
        assert_eq!(findings[0].kind, FindingKind::Warning);
        assert!(findings[0].message.contains("exceeds 4 weeks"));
    }

    #[test]
    fn test_too_many_steps_warns() {
        let steps: Vec<_> = (1..=11).map(|i| timed(i, "1-2 hours")).collect();
        let findings = run(&steps);

        assert_eq!(findings[0].kind, FindingKind::Warning);
        assert!(findings[0].message.contains("more than 10 steps"));
    }

    #[test]
    fn test_unbalanced_adjacent_steps() {
        let findings = run(&[
            timed(1, "1-2 hours"),
            timed(2, "8-10 hours"),
            timed(3, "7-9 hours"),
        ]);

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[1].id, "timeline-balance");
        let steps = findings[1].details.as_ref().unwrap()["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0]["step"], 2);
    }

    #[test]
    fn test_difference_of_exactly_four_is_balanced() {
        let findings = run(&[timed(1, "1-1 hours"), timed(2, "5-5 hours")]);
        assert_eq!(findings.len(), 1);
    }
}
