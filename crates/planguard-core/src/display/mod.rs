//! Markdown formatting for validation output.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while newtype wrappers in [`collections`] format groups of findings and
//! recommendations with consistent empty-collection handling.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │    Markdown     │
//! │ (Report, ...)   │───▶│    wrappers     │───▶│ (terminal/file) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use planguard_core::{display::Findings, models::Finding};
//!
//! let findings = vec![Finding::warning("timeline-balance", "Timeline Balance", "Uneven")];
//! let output = Findings(&findings).to_string();
//! assert!(output.contains("**Timeline Balance**"));
//! ```

pub mod collections;
pub mod models;

pub use collections::{Findings, Recommendations};
