//! Risk assessment and mitigation findings.

use serde_json::json;

use super::Evaluator;
use crate::{
    config::RuleSet,
    error::Result,
    models::{Finding, RiskLevel},
    plan::PreparedPlan,
    risk::{identify_risks, mitigation_score},
};

/// A plan with at least this many high-level risk entries fails.
pub const FAILING_HIGH_RISK_COUNT: usize = 3;
const MITIGATION_PASS: u8 = 70;
const MITIGATION_WARN: u8 = 40;

/// Scans step text for risk phrases and scores how well risk is mitigated.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskEvaluator;

impl Evaluator for RiskEvaluator {
    fn name(&self) -> &'static str {
        "risk"
    }

    fn evaluate(&self, plan: &PreparedPlan<'_>, rules: &RuleSet) -> Result<Vec<Finding>> {
        let risks = identify_risks(plan, rules);
        let high = risks.iter().filter(|r| r.level == RiskLevel::High).count();
        let medium = risks.len() - high;

        let summary = format!("{high} high and {medium} medium risk indicator(s) found");
        let assessment = if high >= FAILING_HIGH_RISK_COUNT {
            Finding::failed("risk-assessment", "Risk Assessment", summary)
        } else if !risks.is_empty() {
            Finding::warning("risk-assessment", "Risk Assessment", summary)
        } else {
            Finding::passed(
                "risk-assessment",
                "Risk Assessment",
                "No risk indicators found in step descriptions",
            )
        }
        .with_details(&json!({
            "risks": risks,
            "highCount": high,
            "mediumCount": medium,
        }))?;

        let score = mitigation_score(plan, rules);
        let message = format!("Mitigation score is {score}/100");
        let mitigation = if score >= MITIGATION_PASS {
            Finding::passed("risk-mitigation", "Risk Mitigation", message)
        } else if score >= MITIGATION_WARN {
            Finding::warning("risk-mitigation", "Risk Mitigation", message)
        } else {
            Finding::failed("risk-mitigation", "Risk Mitigation", message)
        }
        .with_details(&json!({
            "mitigationScore": score,
            "recommendation": (score < MITIGATION_PASS)
                .then_some("Add backup resources and contingency steps for risky work"),
        }))?;

        Ok(vec![assessment, mitigation])
    }
}
