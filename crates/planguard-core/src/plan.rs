//! Plan ingestion: turns raw steps into the form the evaluators consume.

use std::collections::HashMap;

use crate::models::PlanStep;

/// Midpoint assumed when a duration cannot be parsed.
pub const DEFAULT_DURATION_HOURS: f64 = 2.0;

/// Parse a duration descriptor to its numeric midpoint.
///
/// The first two numbers in the text are treated as a range ("1-2 hours"
/// gives 1.5). A single number is taken as-is. Anything else yields
/// [`DEFAULT_DURATION_HOURS`]. The unit is not interpreted.
///
/// ```rust
/// use planguard_core::plan::duration_midpoint;
///
/// assert_eq!(duration_midpoint("1-2 hours"), 1.5);
/// assert_eq!(duration_midpoint("3 hours"), 3.0);
/// assert_eq!(duration_midpoint("soon"), 2.0);
/// ```
pub fn duration_midpoint(text: &str) -> f64 {
    let mut numbers = text
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|n| n.is_finite());

    match (numbers.next(), numbers.next()) {
        (Some(low), Some(high)) => (low + high) / 2.0,
        (Some(single), None) => single,
        _ => DEFAULT_DURATION_HOURS,
    }
}

/// A step with its derived validation inputs.
#[derive(Debug, Clone)]
pub struct PreparedStep<'a> {
    pub step: &'a PlanStep,
    /// 1-based position in the plan
    pub position: usize,
    /// Parsed duration midpoint in hours
    pub midpoint: f64,
    /// Lower-cased "title description" used for keyword matching
    pub search_text: String,
}

/// Validation-ready view over a plan's steps.
#[derive(Debug, Clone)]
pub struct PreparedPlan<'a> {
    steps: Vec<PreparedStep<'a>>,
    index: HashMap<u64, usize>,
}

impl<'a> PreparedPlan<'a> {
    /// Normalize an ordered step sequence.
    ///
    /// When an id occurs more than once the first occurrence is the one
    /// returned by [`PreparedPlan::get`].
    pub fn new(steps: &'a [PlanStep]) -> Self {
        let mut index = HashMap::with_capacity(steps.len());
        let prepared = steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                index.entry(step.id).or_insert(i);
                PreparedStep {
                    step,
                    position: i + 1,
                    midpoint: duration_midpoint(&step.duration),
                    search_text: format!("{} {}", step.title, step.description).to_lowercase(),
                }
            })
            .collect();

        Self {
            steps: prepared,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PreparedStep<'a>> {
        self.steps.iter()
    }

    /// Look up a step by id.
    pub fn get(&self, id: u64) -> Option<&PreparedStep<'a>> {
        self.index.get(&id).map(|&i| &self.steps[i])
    }

    /// Whether a step with this id is defined.
    pub fn contains(&self, id: u64) -> bool {
        self.index.contains_key(&id)
    }

    /// Sum of all duration midpoints, in hours.
    pub fn total_hours(&self) -> f64 {
        self.steps.iter().map(|s| s.midpoint).sum()
    }
}

impl<'p, 'a> IntoIterator for &'p PreparedPlan<'a> {
    type Item = &'p PreparedStep<'a>;
    type IntoIter = std::slice::Iter<'p, PreparedStep<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_of_range() {
        assert_eq!(duration_midpoint("3-4 hours"), 3.5);
        assert_eq!(duration_midpoint("1.5-2.5 hours"), 2.0);
        assert_eq!(duration_midpoint("10 - 20 hours"), 15.0);
    }

    #[test]
    fn test_midpoint_fallback() {
        assert_eq!(duration_midpoint(""), DEFAULT_DURATION_HOURS);
        assert_eq!(duration_midpoint("a while"), DEFAULT_DURATION_HOURS);
        assert_eq!(duration_midpoint("..."), DEFAULT_DURATION_HOURS);
    }

    #[test]
    fn test_prepared_plan_lookup_and_text() {
        let steps = vec![
            PlanStep::new(10, "Design").with_description("Tight Timeline ahead"),
            PlanStep::new(20, "Build").with_duration("4-6 hours"),
        ];
        let plan = PreparedPlan::new(&steps);

        assert_eq!(plan.len(), 2);
        assert!(plan.contains(20));
        assert!(!plan.contains(30));
        assert_eq!(plan.get(20).unwrap().position, 2);
        assert_eq!(plan.get(10).unwrap().search_text, "design tight timeline ahead");
        assert_eq!(plan.total_hours(), 2.0 + 5.0);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let steps = vec![PlanStep::new(1, "First"), PlanStep::new(1, "Second")];
        let plan = PreparedPlan::new(&steps);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.get(1).unwrap().step.title, "First");
    }
}
