//! Core library for the planguard plan validator.
//!
//! Given the ordered steps of a task plan, the validator runs five
//! independent rule evaluators (feasibility, resources, timeline,
//! dependencies, risk), scores the resulting findings and derives a short
//! list of recommendations. The dependency evaluator builds the step graph
//! and detects cycles; the risk evaluator matches keyword tables and scores
//! mitigation.
//!
//! Validation is synchronous, performs no I/O and never fails: malformed
//! steps fall back to defaults, structural problems become findings, and an
//! internal evaluator fault is reported as a fixed fallback result.
//!
//! # Quick Start
//!
//! ```rust
//! use planguard_core::{models::PlanStep, ValidationResult, ValidatorBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = ValidatorBuilder::new().without_user_rules().build()?;
//!
//! let steps = vec![
//!     PlanStep::new(1, "Design").with_dependencies(vec![2]),
//!     PlanStep::new(2, "Build").with_dependencies(vec![1]),
//! ];
//!
//! match validator.validate("Build a shed", &steps) {
//!     ValidationResult::Success(report) => {
//!         println!("{report}");
//!         assert!(report.validations.iter().any(|f| f.is_failed()));
//!     }
//!     ValidationResult::Failure(failure) => println!("{failure}"),
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod evaluators;
pub mod graph;
pub mod models;
pub mod plan;
pub mod recommendations;
pub mod risk;
pub mod scoring;
pub mod validator;

// Re-export commonly used types
pub use config::RuleSet;
pub use display::{Findings, Recommendations};
pub use error::{Result, ValidationError};
pub use evaluators::Evaluator;
pub use graph::{DependencyAnalysis, DependencyGraph};
pub use models::{
    Finding, FindingKind, PlanDocument, PlanStep, RiskEntry, RiskLevel, ValidationReport,
    ValidationResult,
};
pub use validator::{Validator, ValidatorBuilder};
