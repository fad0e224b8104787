use serde::{Deserialize, Serialize};

/// Every scoring configuration must allocate exactly this much.
pub const TARGET_WEIGHT_SUM: u32 = 100;

/// One assessment section with its default weighting and an optional
/// operator override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringCriterion {
    pub section: String,
    pub default_weight: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_weight: Option<u8>,
}

impl ScoringCriterion {
    fn new(section: &str, default_weight: u8) -> Self {
        Self {
            section: section.to_string(),
            default_weight,
            custom_weight: None,
        }
    }
}

/// The weight a criterion contributes: the custom override when present,
/// the default otherwise.
pub fn effective_weight(criterion: &ScoringCriterion) -> u8 {
    criterion.custom_weight.unwrap_or(criterion.default_weight)
}

/// Accept a configuration iff the effective weights sum to exactly 100.
/// Both under- and over-allocation fail; an empty configuration sums to 0
/// and therefore always fails.
pub fn validate_weights(criteria: &[ScoringCriterion]) -> Result<(), WeightSumError> {
    let actual: u32 = criteria
        .iter()
        .map(|criterion| u32::from(effective_weight(criterion)))
        .sum();

    if actual == TARGET_WEIGHT_SUM {
        Ok(())
    } else {
        Err(WeightSumError { actual })
    }
}

/// Default assessment sections for the ideation program. The defaults sum to
/// 75 on purpose: an operator has to allocate the remainder with custom
/// weights before the configuration can be saved.
pub fn ideation_criteria() -> Vec<ScoringCriterion> {
    vec![
        ScoringCriterion::new("Innovation Types", 10),
        ScoringCriterion::new("SWOT Analysis", 10),
        ScoringCriterion::new("Market Entry Power", 5),
        ScoringCriterion::new("Customer Segmentation", 5),
        ScoringCriterion::new("Revenue Stream", 15),
        ScoringCriterion::new("Cost Structure", 15),
        ScoringCriterion::new("Pricing and Margin Plan", 10),
        ScoringCriterion::new("Brand Identity", 5),
    ]
}

/// Scoring weights did not aggregate to the target sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("scoring weights sum to {actual}%, expected 100%")]
pub struct WeightSumError {
    pub actual: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_weight_overrides_default() {
        let mut criterion = ScoringCriterion::new("Revenue Stream", 15);
        assert_eq!(effective_weight(&criterion), 15);
        criterion.custom_weight = Some(40);
        assert_eq!(effective_weight(&criterion), 40);
    }

    #[test]
    fn default_ideation_criteria_underallocate_to_75() {
        let err = validate_weights(&ideation_criteria()).expect_err("defaults are incomplete");
        assert_eq!(err, WeightSumError { actual: 75 });
    }

    #[test]
    fn single_override_can_complete_the_allocation() {
        let mut criteria = ideation_criteria();
        let brand = criteria
            .iter_mut()
            .find(|criterion| criterion.section == "Brand Identity")
            .expect("section exists");
        brand.custom_weight = Some(30);
        validate_weights(&criteria).expect("sums to exactly 100");
    }

    #[test]
    fn over_allocation_is_rejected() {
        let mut criteria = ideation_criteria();
        criteria[0].custom_weight = Some(50);
        let err = validate_weights(&criteria).expect_err("sums past 100");
        assert_eq!(err, WeightSumError { actual: 115 });
    }

    #[test]
    fn empty_configuration_always_fails() {
        let err = validate_weights(&[]).expect_err("nothing allocated");
        assert_eq!(err, WeightSumError { actual: 0 });
    }
}
