//! Command handlers.
//!
//! Each handler reads its input, calls into `planguard_core`, and hands the
//! formatted output to the renderer (markdown) or stdout (JSON).

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{bail, Context, Result};
use log::{debug, info};
use planguard_core::{PlanDocument, ValidationResult, Validator};

use crate::{
    args::{OutputFormat, ValidateArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    validator: Validator,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(validator: Validator, renderer: TerminalRenderer) -> Self {
        Self {
            validator,
            renderer,
        }
    }

    pub fn validate(&self, args: ValidateArgs) -> Result<()> {
        let mut document = read_document(args.file.as_deref())?;
        if let Some(task) = args.task {
            document.task = task;
        }
        info!(
            "Validating {} steps for task {:?}",
            document.steps.len(),
            document.task
        );

        let result = self.validator.validate_document(&document);

        match args.format {
            OutputFormat::Markdown => self.renderer.render(&result.to_string())?,
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&result).context("Failed to serialize result")?
            ),
        }

        if let Some(min_score) = args.min_score {
            check_min_score(&result, min_score)?;
        }
        Ok(())
    }

    pub fn rules(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self.validator.rules())
            .context("Failed to serialize rule tables")?;
        println!("{json}");
        Ok(())
    }

    pub fn schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(PlanDocument);
        let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
        println!("{json}");
        Ok(())
    }
}

fn read_document(path: Option<&Path>) -> Result<PlanDocument> {
    let json = match path {
        Some(path) if path != Path::new("-") => {
            debug!("Reading plan document from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read plan document {}", path.display()))?
        }
        _ => {
            debug!("Reading plan document from stdin");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read plan document from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&json).context("Failed to parse plan document")
}

fn check_min_score(result: &ValidationResult, min_score: u8) -> Result<()> {
    match result.score() {
        Some(score) if score >= min_score => Ok(()),
        Some(score) => bail!("Plan scored {score}, below the required minimum of {min_score}"),
        None => bail!("Validation did not complete; cannot satisfy minimum score {min_score}"),
    }
}

#[cfg(test)]
mod tests {
    use planguard_core::models::{ValidationFailure, ValidationResult};

    use super::*;

    #[test]
    fn test_min_score_on_fallback_fails() {
        let result = ValidationResult::Failure(ValidationFailure::new("boom"));
        assert!(check_min_score(&result, 0).is_err());
    }

    #[test]
    fn test_min_score_threshold() {
        let result = Validator::default().validate("", &[]);
        let score = result.score().unwrap();

        assert!(check_min_score(&result, score).is_ok());
        assert!(check_min_score(&result, score + 1).is_err());
    }
}
