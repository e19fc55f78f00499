//! Dependency graph findings: cycles, complexity and unknown references.

use log::debug;
use serde_json::json;

use super::Evaluator;
use crate::{
    config::RuleSet,
    error::Result,
    graph::{DependencyAnalysis, DependencyGraph},
    models::Finding,
    plan::PreparedPlan,
};

/// Builds the dependency graph and reports its structural problems.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyEvaluator;

fn format_cycle(cycle: &[u64]) -> String {
    cycle
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl Evaluator for DependencyEvaluator {
    fn name(&self) -> &'static str {
        "dependencies"
    }

    fn evaluate(&self, plan: &PreparedPlan<'_>, _rules: &RuleSet) -> Result<Vec<Finding>> {
        let graph = DependencyGraph::build(plan.iter().map(|s| s.step));
        let analysis = DependencyAnalysis::from_graph(&graph);
        debug!(
            "Dependency graph: {} nodes, {} cycles, depth {}",
            graph.node_count(),
            analysis.cycles_found.len(),
            analysis.max_depth
        );

        let mut findings = Vec::with_capacity(3);

        let cycles_finding = if analysis.cycles_found.is_empty() {
            Finding::passed(
                "dependency-cycles",
                "Circular Dependencies",
                format!(
                    "No circular dependencies; longest chain is {} step(s)",
                    analysis.max_depth
                ),
            )
        } else {
            let rendered: Vec<String> =
                analysis.cycles_found.iter().map(|c| format_cycle(c)).collect();
            Finding::failed(
                "dependency-cycles",
                "Circular Dependencies",
                format!("Circular dependencies found: {}", rendered.join("; ")),
            )
        };
        findings.push(cycles_finding.with_details(&analysis)?);

        let complexity_finding = if analysis.complex_steps.is_empty() {
            Finding::passed(
                "dependency-complexity",
                "Dependency Complexity",
                format!(
                    "{} dependencies in total, none of the steps is overloaded",
                    analysis.total_dependency_count
                ),
            )
        } else {
            let ids: Vec<String> = analysis
                .complex_steps
                .iter()
                .map(|c| c.step.to_string())
                .collect();
            Finding::warning(
                "dependency-complexity",
                "Dependency Complexity",
                format!("Steps with complex dependencies: {}", ids.join(", ")),
            )
        };
        findings.push(complexity_finding.with_details(&json!({
            "complexSteps": analysis.complex_steps,
            "totalDependencyCount": analysis.total_dependency_count,
        }))?);

        let dangling = graph.dangling_references();
        if !dangling.is_empty() {
            let missing: Vec<String> = dangling
                .iter()
                .map(|d| format!("step {} -> {}", d.step, d.dependency))
                .collect();
            findings.push(
                Finding::warning(
                    "dependency-references",
                    "Dependency References",
                    format!("Dependencies on undefined steps: {}", missing.join(", ")),
                )
                .with_details(&json!({ "references": dangling }))?,
            );
        }

        Ok(findings)
    }
}
