//! Keyword-based risk identification and mitigation scoring.

use crate::{
    config::RuleSet,
    graph::COMPLEX_DEPENDENCY_THRESHOLD,
    models::{RiskEntry, RiskLevel},
    plan::{PreparedPlan, PreparedStep},
};

const MITIGATION_KEYWORD_POINTS: u32 = 20;
const BACKUP_RESOURCE_POINTS: u32 = 15;
const FEW_DEPENDENCIES_POINTS: u32 = 10;
const MAX_POINTS_PER_STEP: u32 = 3 * 10;

/// Every high and medium keyword match across the plan.
///
/// Matches are exhaustive: a step containing two high-risk phrases yields two
/// entries, and a step may contribute entries of both levels. Entries are
/// ordered by step, then high before medium, then by table order.
pub fn identify_risks(plan: &PreparedPlan<'_>, rules: &RuleSet) -> Vec<RiskEntry> {
    let mut risks = Vec::new();
    for step in plan {
        collect_matches(step, &rules.high_risk, RiskLevel::High, &mut risks);
        collect_matches(step, &rules.medium_risk, RiskLevel::Medium, &mut risks);
    }
    risks
}

fn collect_matches(
    step: &PreparedStep<'_>,
    keywords: &[String],
    level: RiskLevel,
    out: &mut Vec<RiskEntry>,
) {
    out.extend(
        keywords
            .iter()
            .filter(|keyword| step.search_text.contains(keyword.as_str()))
            .map(|keyword| RiskEntry {
                step: step.position,
                title: step.step.title.clone(),
                risk: keyword.clone(),
                level,
                impact: level.impact().to_string(),
            }),
    );
}

/// How well the plan's steps address foreseeable risk, from 0 to 100.
///
/// Each step earns points for a mitigation phrase in its description, a
/// resource named "backup", and having fewer than three dependencies. The
/// total is scaled against `3 * steps * 10` and capped at 100. A plan with
/// no steps scores 0.
pub fn mitigation_score(plan: &PreparedPlan<'_>, rules: &RuleSet) -> u8 {
    if plan.is_empty() {
        return 0;
    }

    let points: u32 = plan.iter().map(|step| step_points(step, rules)).sum();
    let max = MAX_POINTS_PER_STEP * plan.len() as u32;
    let scaled = (f64::from(points) / f64::from(max) * 100.0).round();

    scaled.min(100.0) as u8
}

fn step_points(step: &PreparedStep<'_>, rules: &RuleSet) -> u32 {
    let description = step.step.description.to_lowercase();
    let mut points = 0;

    if rules
        .mitigation
        .iter()
        .any(|keyword| description.contains(keyword.as_str()))
    {
        points += MITIGATION_KEYWORD_POINTS;
    }
    if step
        .step
        .resources
        .iter()
        .any(|resource| resource.to_lowercase().contains("backup"))
    {
        points += BACKUP_RESOURCE_POINTS;
    }
    if step.step.dependencies.len() <= COMPLEX_DEPENDENCY_THRESHOLD {
        points += FEW_DEPENDENCIES_POINTS;
    }

    points
}
