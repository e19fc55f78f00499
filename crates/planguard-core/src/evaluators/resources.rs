//! Distinct resource count and critical resource detection.

use serde_json::json;

use super::Evaluator;
use crate::{config::RuleSet, error::Result, models::Finding, plan::PreparedPlan};

/// More distinct resources than this triggers a consolidation warning.
pub const MAX_DISTINCT_RESOURCES: usize = 10;

/// Counts the distinct resources a plan needs and flags scarce ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceEvaluator;

/// Distinct resource names across all steps, in first-appearance order.
pub fn distinct_resources<'a>(plan: &PreparedPlan<'a>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for step in plan {
        for resource in &step.step.resources {
            if !seen.contains(&resource.as_str()) {
                seen.push(resource.as_str());
            }
        }
    }
    seen
}

/// Resources whose name contains a critical keyword, deduplicated.
pub fn critical_resources<'a>(resources: &[&'a str], rules: &RuleSet) -> Vec<&'a str> {
    resources
        .iter()
        .copied()
        .filter(|resource| {
            let lower = resource.to_lowercase();
            rules
                .critical_resources
                .iter()
                .any(|keyword| lower.contains(keyword.as_str()))
        })
        .collect()
}

impl Evaluator for ResourceEvaluator {
    fn name(&self) -> &'static str {
        "resources"
    }

    fn evaluate(&self, plan: &PreparedPlan<'_>, rules: &RuleSet) -> Result<Vec<Finding>> {
        let resources = distinct_resources(plan);
        let count = resources.len();

        let count_finding = if count <= MAX_DISTINCT_RESOURCES {
            Finding::passed(
                "resource-count",
                "Resource Count",
                format!("The plan uses {count} distinct resources"),
            )
        } else {
            Finding::warning(
                "resource-count",
                "Resource Count",
                format!(
                    "The plan uses {count} distinct resources, more than {MAX_DISTINCT_RESOURCES}"
                ),
            )
        }
        .with_details(&json!({
            "count": count,
            "resources": resources,
            "recommendation": (count > MAX_DISTINCT_RESOURCES)
                .then_some("Consolidate resources or share them between steps"),
        }))?;

        let mut findings = vec![count_finding];

        let critical = critical_resources(&resources, rules);
        if !critical.is_empty() {
            findings.push(
                Finding::warning(
                    "critical-resources",
                    "Critical Resources",
                    format!("Scarce resources required: {}", critical.join(", ")),
                )
                .with_details(&json!({
                    "resources": critical,
                    "recommendation": "Secure these resources early and identify alternatives",
                }))?,
            );
        }

        Ok(findings)
    }
}
