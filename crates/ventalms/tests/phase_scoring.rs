//! Behavior of the phase scoring model: program metadata lookups, milestone
//! schedules, and the weight-sum contract the setup screens rely on before
//! allowing a save.

use std::str::FromStr;

use ventalms::program::{
    self, effective_weight, ideation_criteria, validate_weights, ProgramError, ProgramId,
    ScoringCriterion, WeightSumError,
};

#[test]
fn program_metadata_is_fixed_per_id() {
    let ideation = program::program_type(ProgramId::Ideation);
    assert_eq!(ideation.name, "Ideation Program");
    assert_eq!(ideation.duration, "3 months");

    let incuboost = program::program_type(ProgramId::IncuBoost);
    assert_eq!(incuboost.name, "IncuBoost");
    assert_eq!(incuboost.duration, "24 months");
}

#[test]
fn milestone_schedule_distinguishes_empty_from_unknown() {
    let ideation = ProgramId::from_str("ideation").expect("known program");
    let months: Vec<&str> = program::milestones(ideation)
        .iter()
        .map(|milestone| milestone.month)
        .collect();
    assert_eq!(months, vec!["m3", "m6", "m9", "m12"]);

    let incuhatch = ProgramId::from_str("incuhatch").expect("known program");
    assert!(program::milestones(incuhatch).is_empty());

    let err = ProgramId::from_str("unknown").expect_err("outside the catalog");
    assert_eq!(err, ProgramError::UnknownProgram("unknown".to_string()));
}

#[test]
fn default_ideation_weights_fail_with_their_actual_sum() {
    let criteria = ideation_criteria();
    let defaults: Vec<u8> = criteria.iter().map(effective_weight).collect();
    assert_eq!(defaults, vec![10, 10, 5, 5, 15, 15, 10, 5]);

    let err = validate_weights(&criteria).expect_err("75 != 100");
    assert_eq!(err, WeightSumError { actual: 75 });
    assert_eq!(
        err.to_string(),
        "scoring weights sum to 75%, expected 100%"
    );
}

#[test]
fn one_custom_override_raising_the_sum_to_100_passes() {
    let mut criteria = ideation_criteria();
    criteria
        .iter_mut()
        .find(|criterion| criterion.section == "Revenue Stream")
        .expect("section exists")
        .custom_weight = Some(40);
    validate_weights(&criteria).expect("sums to exactly 100");
}

#[test]
fn overrides_can_push_the_sum_past_100() {
    let criteria = vec![
        ScoringCriterion {
            section: "Innovation Types".to_string(),
            default_weight: 60,
            custom_weight: None,
        },
        ScoringCriterion {
            section: "SWOT Analysis".to_string(),
            default_weight: 40,
            custom_weight: Some(55),
        },
    ];
    let err = validate_weights(&criteria).expect_err("over-allocated");
    assert_eq!(err, WeightSumError { actual: 115 });
}

#[test]
fn criteria_deserialize_from_setup_screen_payloads() {
    let raw = r#"[
        {"section": "Innovation Types", "default_weight": 10},
        {"section": "SWOT Analysis", "default_weight": 10, "custom_weight": 80}
    ]"#;
    let criteria: Vec<ScoringCriterion> = serde_json::from_str(raw).expect("parses");
    assert_eq!(effective_weight(&criteria[0]), 10);
    assert_eq!(effective_weight(&criteria[1]), 80);
    let err = validate_weights(&criteria).expect_err("90 != 100");
    assert_eq!(err, WeightSumError { actual: 90 });
}
