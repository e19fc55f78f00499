//! Data models for plans, findings and validation results.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that the data structures stay free of
//! presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use planguard_core::models::{Finding, FindingKind, PlanStep};
//!
//! let step = PlanStep::new(1, "Set up repository")
//!     .with_duration("1-2 hours")
//!     .with_resources(["Developer"]);
//! assert!(step.dependencies.is_empty());
//!
//! let finding = Finding::warning("resource-count", "Resource Count", "Too many resources");
//! assert_eq!(finding.kind, FindingKind::Warning);
//! ```

pub mod finding;
pub mod report;
pub mod risk;
pub mod step;


pub use finding::{Finding, FindingKind};
pub use report::{
    Breakdown, Priority, Recommendation, ScoreStatus, Summary, ValidationFailure,
    ValidationReport, ValidationResult,
};
pub use risk::{RiskEntry, RiskLevel};
pub use step::{PlanDocument, PlanStep};
