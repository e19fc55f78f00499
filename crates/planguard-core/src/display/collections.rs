//! Collection wrapper types for displaying groups of findings and
//! recommendations.

use std::fmt;

use crate::models::{Finding, Recommendation};

/// Newtype wrapper for displaying a list of findings.
pub struct Findings<'a>(pub &'a [Finding]);

impl Findings<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Findings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No findings.");
        }
        for finding in self.0 {
            write!(f, "{finding}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a list of recommendations.
pub struct Recommendations<'a>(pub &'a [Recommendation]);

impl Recommendations<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Recommendations<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No recommendations.");
        }
        for recommendation in self.0 {
            write!(f, "{recommendation}")?;
        }
        Ok(())
    }
}
