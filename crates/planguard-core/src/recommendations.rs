//! Follow-up actions derived from findings.

use crate::models::{Finding, Priority, Recommendation};

/// More warnings than this triggers a general review recommendation.
pub const WARNING_REVIEW_THRESHOLD: usize = 3;

/// Derive recommendations from a finding set.
///
/// Rules are applied in a fixed order and each emits at most one entry:
/// failed findings, a large number of warnings, resource warnings, then
/// timeline warnings.
pub fn recommend(findings: &[Finding]) -> Vec<Recommendation> {
    let failed = findings.iter().filter(|f| f.is_failed()).count();
    let warnings: Vec<&Finding> = findings.iter().filter(|f| f.is_warning()).collect();
    let mut recommendations = Vec::new();

    if failed > 0 {
        recommendations.push(Recommendation {
            priority: Priority::High,
            action: "Address failed validations".to_string(),
            reason: format!("{failed} validation(s) failed and block execution of the plan"),
        });
    }

    if warnings.len() > WARNING_REVIEW_THRESHOLD {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            action: "Review warnings".to_string(),
            reason: format!("{} warnings point to weak spots in the plan", warnings.len()),
        });
    }

    if warnings.iter().any(|f| f.title.contains("Resource")) {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            action: "Review resource allocation".to_string(),
            reason: "Resource usage was flagged; consolidate or secure scarce resources"
                .to_string(),
        });
    }

    if warnings.iter().any(|f| f.title.contains("Timeline")) {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            action: "Review timeline".to_string(),
            reason: "The schedule was flagged; rebalance step durations or split the plan"
                .to_string(),
        });
    }

    recommendations
}
