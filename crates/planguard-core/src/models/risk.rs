//! Risk entries derived from step text.

use serde::{Deserialize, Serialize};

/// Severity of a matched risk keyword.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
        }
    }

    /// Impact statement reported alongside entries of this level.
    pub fn impact(&self) -> &'static str {
        match self {
            RiskLevel::High => "Could significantly delay or derail the plan",
            RiskLevel::Medium => "May cause minor delays or rework",
        }
    }
}

/// A single keyword match in a step's title or description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskEntry {
    /// 1-based position of the step in the plan
    pub step: usize,
    /// Title of the matching step
    pub title: String,
    /// The keyword that matched
    pub risk: String,
    pub level: RiskLevel,
    pub impact: String,
}
