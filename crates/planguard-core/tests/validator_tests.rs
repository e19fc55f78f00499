use planguard_core::{
    models::{FindingKind, PlanDocument, PlanStep, RiskLevel, ScoreStatus},
    plan::PreparedPlan,
    risk::identify_risks,
    DependencyAnalysis, RuleSet, ValidatorBuilder,
};

fn load_document(json: &str) -> PlanDocument {
    serde_json::from_str(json).expect("Failed to parse plan document")
}

fn find<'a>(
    findings: &'a [planguard_core::Finding],
    id: &str,
) -> &'a planguard_core::Finding {
    findings
        .iter()
        .find(|f| f.id == id)
        .unwrap_or_else(|| panic!("missing finding {id}"))
}

#[test]
fn test_realistic_plan_end_to_end() {
    let document = load_document(
        r#"{
            "task": "Launch a marketing website",
            "steps": [
                {
                    "id": 1,
                    "title": "Gather requirements",
                    "description": "Interview multiple stakeholders about goals",
                    "duration": "2-3 hours",
                    "resources": ["Product manager"],
                    "dependencies": []
                },
                {
                    "id": 2,
                    "title": "Design pages",
                    "description": "Create wireframes and visual designs",
                    "duration": "6-8 hours",
                    "resources": ["Designer", "Premium font license"],
                    "dependencies": [1]
                },
                {
                    "id": 3,
                    "title": "Build site",
                    "description": "Implement pages with a tight timeline",
                    "duration": "10-14 hours",
                    "resources": ["Developer"],
                    "dependencies": [1, 2]
                },
                {
                    "id": 4,
                    "title": "Launch",
                    "description": "Deploy and keep a rollback plan ready",
                    "duration": "1-2 hours",
                    "resources": ["Developer", "Backup hosting"],
                    "dependencies": [1, 2, 3]
                }
            ]
        }"#,
    );

    let validator = ValidatorBuilder::new()
        .without_user_rules()
        .build()
        .expect("Failed to build validator");
    let result = validator.validate_document(&document);
    let report = result.report().expect("validation should succeed");
    let findings = &report.validations;

    assert_eq!(find(findings, "feasibility-overall").kind, FindingKind::Passed);
    assert_eq!(find(findings, "critical-resources").kind, FindingKind::Warning);
    assert_eq!(find(findings, "dependency-cycles").kind, FindingKind::Passed);
    assert_eq!(find(findings, "dependency-complexity").kind, FindingKind::Warning);
    assert_eq!(find(findings, "timeline-balance").kind, FindingKind::Warning);

    let cycles = find(findings, "dependency-cycles");
    assert_eq!(cycles.details.as_ref().unwrap()["maxDepth"], 4);

    let risk = find(findings, "risk-assessment");
    assert_eq!(risk.kind, FindingKind::Warning);
    assert_eq!(risk.details.as_ref().unwrap()["highCount"], 2);

    // 2.5 + 7 + 12 + 1.5 = 23 hours
    assert_eq!(
        find(findings, "timeline-estimate").details.as_ref().unwrap()["estimate"],
        "2.9 days"
    );

    assert!(report.score <= 100);
    assert_eq!(report.summary.breakdown.total(), findings.len());
    let actions: Vec<&str> = report
        .recommendations
        .iter()
        .map(|r| r.action.as_str())
        .collect();
    assert!(actions.contains(&"Review resource allocation"));
    assert!(actions.contains(&"Review timeline"));
}

#[test]
fn test_score_extremes_and_bounds() {
    let validator = ValidatorBuilder::new().without_user_rules().build().unwrap();

    let broken = vec![
        PlanStep::new(1, "A").with_dependencies(vec![2, 3, 4]),
        PlanStep::new(2, "B").with_dependencies(vec![1]),
    ];
    let report = validator.validate("", &broken).report().cloned().unwrap();

    assert!(report.score < 60);
    assert_eq!(report.summary.status, ScoreStatus::NeedsMajorImprovements);
    assert_eq!(
        report.recommendations[0].action,
        "Address failed validations"
    );
}

#[test]
fn test_two_step_cycle_reported_once() {
    let steps = vec![
        PlanStep::new(1, "A").with_dependencies(vec![2]),
        PlanStep::new(2, "B").with_dependencies(vec![1]),
    ];
    let analysis = DependencyAnalysis::of(&steps);

    assert_eq!(analysis.cycles_found.len(), 1);
    assert!(analysis.cycles_found[0].contains(&1));
    assert!(analysis.cycles_found[0].contains(&2));
}

#[test]
fn test_resource_dedup_across_steps() {
    let steps = vec![
        PlanStep::new(1, "One").with_resources(["A", "B"]),
        PlanStep::new(2, "Two").with_resources(["B", "C"]),
    ];
    let result = ValidatorBuilder::new()
        .without_user_rules()
        .build()
        .unwrap()
        .validate("", &steps);

    let resources = find(result.validations(), "resource-count");
    assert_eq!(resources.details.as_ref().unwrap()["count"], 3);
}

#[test]
fn test_tight_timeline_is_high_risk() {
    let steps = vec![PlanStep::new(1, "Rush").with_description("This has a tight timeline")];
    let risks = identify_risks(&PreparedPlan::new(&steps), &RuleSet::default());

    assert!(risks
        .iter()
        .any(|r| r.step == 1 && r.level == RiskLevel::High));
}

#[test]
fn test_malformed_document_tolerated() {
    let document = load_document(
        r#"{ "steps": [ { "id": 1 }, { "id": 2, "duration": "whenever", "dependencies": [9] } ] }"#,
    );
    let result = ValidatorBuilder::new()
        .without_user_rules()
        .build()
        .unwrap()
        .validate_document(&document);

    assert!(result.is_success());
    assert_eq!(
        find(result.validations(), "timeline-estimate").details.as_ref().unwrap()["estimate"],
        "4 hours"
    );
    assert_eq!(
        find(result.validations(), "dependency-references").kind,
        FindingKind::Warning
    );
}

#[test]
fn test_json_shape() {
    let steps = vec![PlanStep::new(1, "Only")];
    let result = ValidatorBuilder::new()
        .without_user_rules()
        .build()
        .unwrap()
        .validate("Shape", &steps);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["success"], true);
    assert!(value["validations"].is_array());
    assert!(value["score"].is_u64());
    assert!(value["summary"]["status"].is_string());
    assert!(value["summary"]["breakdown"]["warnings"].is_u64());
    assert!(value["recommendations"].is_array());
}
