//! Score aggregation.

use crate::models::{Breakdown, Finding, FindingKind, ScoreStatus, Summary};

/// Weighted average of the findings as an integer percentage.
///
/// Passed findings weigh 1, warnings 0.5 and failures 0. No findings scores 0.
/// Only a fully passing set scores 100 and only a fully failing set scores 0;
/// a mixed set that would round to either end is held at 99 or 1.
///
/// ```rust
/// use planguard_core::{models::Finding, scoring::score};
///
/// let findings = [Finding::passed("a", "A", ""), Finding::warning("b", "B", "")];
/// assert_eq!(score(&findings), 75);
/// ```
pub fn score(findings: &[Finding]) -> u8 {
    if findings.is_empty() {
        return 0;
    }
    let total: f64 = findings.iter().map(|f| f.kind.weight()).sum();
    let rounded = (100.0 * total / findings.len() as f64).round() as u8;

    let all_passed = findings.iter().all(|f| f.kind == FindingKind::Passed);
    let all_failed = findings.iter().all(|f| f.kind == FindingKind::Failed);
    match rounded {
        100 if !all_passed => 99,
        0 if !all_failed => 1,
        _ => rounded,
    }
}

/// Score, band and breakdown for a finding set.
pub fn summarize(task: &str, findings: &[Finding]) -> Summary {
    let score = score(findings);
    let status = ScoreStatus::from_score(score);
    let breakdown = Breakdown::from_findings(findings);

    let subject = if task.trim().is_empty() {
        "The plan".to_string()
    } else {
        format!("The plan for \"{}\"", task.trim())
    };
    let overall = format!(
        "{subject} scored {score}/100 ({}): {} passed, {} warnings, {} failed.",
        status.as_str(),
        breakdown.passed,
        breakdown.warnings,
        breakdown.failed
    );

    Summary {
        score,
        status,
        breakdown,
        overall,
    }
}
