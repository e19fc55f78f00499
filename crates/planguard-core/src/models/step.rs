//! Plan step and plan document definitions.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One step of a task plan.
///
/// Every field except `id` is optional on the wire; absent values default to
/// empty so that malformed plans can still be validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanStep {
    /// Identifier referenced by other steps' dependency lists
    pub id: u64,

    /// Short human-readable label
    #[serde(default)]
    pub title: String,

    /// Free-text description of the work
    #[serde(default)]
    pub description: String,

    /// Duration estimate such as "2-4 hours"
    #[serde(default)]
    pub duration: String,

    /// Resources the step needs, in declaration order
    #[serde(default)]
    pub resources: Vec<String>,

    /// Ids of the steps that must complete before this one
    #[serde(default)]
    pub dependencies: Vec<u64>,
}

impl PlanStep {
    /// Create a step with the given id and title and no other content.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the duration text.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Set the resource list.
    pub fn with_resources<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources = resources.into_iter().map(Into::into).collect();
        self
    }

    /// Set the dependency list.
    pub fn with_dependencies(mut self, dependencies: impl Into<Vec<u64>>) -> Self {
        self.dependencies = dependencies.into();
        self
    }
}

/// A plan as supplied to the validator: the task it serves and its steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanDocument {
    /// The task the plan was written for
    #[serde(default)]
    pub task: String,

    /// Steps in execution order
    #[serde(default)]
    pub steps: Vec<PlanStep>,
}
