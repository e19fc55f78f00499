//! Tests for the validator module.

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::{
    error::ValidationError,
    models::{Finding, FindingKind, ScoreStatus},
};

struct FaultyEvaluator;

impl Evaluator for FaultyEvaluator {
    fn name(&self) -> &'static str {
        "faulty"
    }

    fn evaluate(&self, _plan: &PreparedPlan<'_>, _rules: &RuleSet) -> Result<Vec<Finding>> {
        Err(ValidationError::evaluator("faulty", "forced fault"))
    }
}

struct PanickingEvaluator;

impl Evaluator for PanickingEvaluator {
    fn name(&self) -> &'static str {
        "panicking"
    }

    fn evaluate(&self, _plan: &PreparedPlan<'_>, _rules: &RuleSet) -> Result<Vec<Finding>> {
        panic!("evaluator bug")
    }
}

fn solid_plan() -> Vec<PlanStep> {
    vec![
        PlanStep::new(1, "Prepare environment")
            .with_description("Prepare servers and write a rollback checklist")
            .with_duration("1-2 hours")
            .with_resources(["Developer", "Backup server"]),
        PlanStep::new(2, "Deploy service")
            .with_description("Deploy the service with a fallback release ready")
            .with_duration("2-3 hours")
            .with_resources(["Developer", "Backup server"])
            .with_dependencies(vec![1]),
    ]
}

#[test]
fn test_solid_plan_scores_100() {
    let result = Validator::default().validate("Ship the service", &solid_plan());
    let report = result.report().expect("validation should succeed");

    assert_eq!(report.validations.len(), 9);
    assert!(report
        .validations
        .iter()
        .all(|f| f.kind == FindingKind::Passed));
    assert_eq!(report.score, 100);
    assert_eq!(report.summary.status, ScoreStatus::Good);
    assert!(report.recommendations.is_empty());
}

#[test]
fn test_empty_plan() {
    let result = Validator::default().validate("Nothing", &[]);
    let report = result.report().unwrap();

    let resource_count = report
        .validations
        .iter()
        .find(|f| f.id == "resource-count")
        .unwrap();
    assert_eq!(resource_count.details.as_ref().unwrap()["count"], 0);

    let cycles = report
        .validations
        .iter()
        .find(|f| f.id == "dependency-cycles")
        .unwrap();
    assert_eq!(cycles.kind, FindingKind::Passed);
    assert_eq!(cycles.details.as_ref().unwrap()["maxDepth"], 0);
    assert_eq!(report.summary.breakdown.failed, 2);
    assert_eq!(report.score, 71);
}

#[test]
fn test_findings_follow_evaluator_order() {
    let result = Validator::default().validate("", &solid_plan());
    let ids: Vec<&str> = result.validations().iter().map(|f| f.id.as_str()).collect();

    assert_eq!(
        ids,
        vec![
            "feasibility-step-1",
            "feasibility-step-2",
            "feasibility-overall",
            "resource-count",
            "timeline-estimate",
            "dependency-cycles",
            "dependency-complexity",
            "risk-assessment",
            "risk-mitigation",
        ]
    );
}

#[test]
fn test_validation_is_idempotent() {
    let steps = vec![
        PlanStep::new(1, "A").with_dependencies(vec![2]),
        PlanStep::new(2, "B")
            .with_description("tight timeline with budget constraints")
            .with_dependencies(vec![1]),
    ];
    let validator = Validator::default();

    assert_eq!(validator.validate("x", &steps), validator.validate("x", &steps));
}

#[test]
fn test_evaluator_fault_yields_fallback() {
    let validator = ValidatorBuilder::new()
        .without_user_rules()
        .with_evaluator(Box::new(FaultyEvaluator))
        .build()
        .unwrap();

    let result = validator.validate("x", &solid_plan());

    assert!(!result.is_success());
    assert_eq!(result.score(), None);
    let findings = result.validations();
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].kind, FindingKind::Passed);
    assert_eq!(findings[1].kind, FindingKind::Warning);
    match result {
        ValidationResult::Failure(failure) => assert!(failure.error.contains("forced fault")),
        ValidationResult::Success(_) => panic!("expected fallback result"),
    }
}

#[test]
#[should_panic(expected = "evaluator bug")]
fn test_evaluator_panic_propagates() {
    let validator = ValidatorBuilder::new()
        .without_user_rules()
        .with_evaluator(Box::new(PanickingEvaluator))
        .build()
        .unwrap();

    validator.validate("x", &solid_plan());
}

#[test]
fn test_builder_loads_rules_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "high_risk": ["vendor lock-in"] }}"#).unwrap();

    let validator = ValidatorBuilder::new()
        .with_rules_path(Some(file.path()))
        .build()
        .unwrap();
    assert_eq!(validator.rules().high_risk, vec!["vendor lock-in"]);

    let steps = vec![PlanStep::new(1, "Adopt").with_description("Accept vendor lock-in")];
    let result = validator.validate("x", &steps);
    let risk = result
        .validations()
        .iter()
        .find(|f| f.id == "risk-assessment")
        .unwrap();
    assert_eq!(risk.kind, FindingKind::Warning);
}

#[test]
fn test_builder_missing_rules_file_errors() {
    let result = ValidatorBuilder::new()
        .with_rules_path(Some("/nonexistent/rules.json"))
        .build();
    assert!(matches!(result, Err(ValidationError::FileSystem { .. })));
}

#[test]
fn test_explicit_rules_take_precedence() {
    let rules = RuleSet {
        critical_resources: vec!["gpu".to_string()],
        ..RuleSet::default()
    };
    let validator = ValidatorBuilder::new()
        .with_rules_path(Some("/nonexistent/rules.json"))
        .with_rules(rules)
        .build()
        .unwrap();

    assert_eq!(validator.rules().critical_resources, vec!["gpu"]);
    assert_eq!(
        validator.evaluator_names(),
        vec!["feasibility", "resources", "timeline", "dependencies", "risk"]
    );
}

#[test]
fn test_validate_document_uses_task() {
    let document = PlanDocument {
        task: "Paint the fence".to_string(),
        steps: solid_plan(),
    };
    let result = Validator::default().validate_document(&document);

    assert!(result
        .report()
        .unwrap()
        .summary
        .overall
        .contains("Paint the fence"));
}
