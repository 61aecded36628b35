//! Weighted strength scoring.
//!
//! Combines the length, variety and complexity sections into a single
//! normalized score, maps it to a [`StrengthCategory`] and derives
//! improvement advice.

use crate::sections::{
    complexity_score, length_recommendation, length_score, pattern_recommendations,
    variety_recommendations, variety_score,
};
use crate::types::{StrengthCategory, StrengthDetails};
use crate::validator::PasswordValidator;

/// Weights applied to the three sub-scores. They sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub length: f64,
    pub variety: f64,
    pub complexity: f64,
}

const WEIGHTS: ScoreWeights = ScoreWeights {
    length: 0.3,
    variety: 0.4,
    complexity: 0.3,
};

/// Rounds to two decimals, ties to even.
fn round_score(score: f64) -> f64 {
    (score * 100.0).round_ties_even() / 100.0
}

/// Computes password strength scores and recommendations.
///
/// Stateless after construction; share one instance across callers.
#[derive(Debug, Clone, Default)]
pub struct StrengthScorer {
    validator: PasswordValidator,
}

impl StrengthScorer {
    pub fn new(validator: PasswordValidator) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &PasswordValidator {
        &self.validator
    }

    pub fn weights(&self) -> ScoreWeights {
        WEIGHTS
    }

    pub fn calculate_length_score(&self, password: &str) -> f64 {
        length_score(password)
    }

    pub fn calculate_variety_score(&self, password: &str) -> f64 {
        variety_score(&self.validator, password)
    }

    pub fn calculate_complexity_score(&self, password: &str) -> f64 {
        complexity_score(&self.validator, password)
    }

    /// Weighted sum of the three sub-scores, rounded to two decimals.
    pub fn calculate_overall_score(&self, password: &str) -> f64 {
        self.combine(
            self.calculate_length_score(password),
            self.calculate_variety_score(password),
            self.calculate_complexity_score(password),
        )
    }

    fn combine(&self, length: f64, variety: f64, complexity: f64) -> f64 {
        let overall =
            length * WEIGHTS.length + variety * WEIGHTS.variety + complexity * WEIGHTS.complexity;
        round_score(overall).clamp(0.0, 1.0)
    }

    pub fn get_strength_category(&self, score: f64) -> StrengthCategory {
        StrengthCategory::from_score(score)
    }

    pub fn get_strength_details(&self, password: &str) -> StrengthDetails {
        let length_score = self.calculate_length_score(password);
        let variety_score = self.calculate_variety_score(password);
        let complexity_score = self.calculate_complexity_score(password);
        let overall_score = self.combine(length_score, variety_score, complexity_score);
        let category = self.get_strength_category(overall_score);
        let validation_errors = self.validator.get_validation_errors(password);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            length_score,
            variety_score,
            complexity_score,
            overall_score,
            category = category.as_str(),
            "password strength computed"
        );

        StrengthDetails {
            length_score,
            variety_score,
            complexity_score,
            overall_score,
            category,
            is_valid: validation_errors.is_empty(),
            validation_errors,
        }
    }

    /// Improvement advice in fixed order: length, missing character
    /// classes, repeats, sequences. Empty when nothing can be improved.
    pub fn get_strength_recommendations(&self, password: &str) -> Vec<String> {
        let mut recommendations = Vec::new();
        recommendations.extend(length_recommendation(password));
        recommendations.extend(variety_recommendations(&self.validator, password));
        recommendations.extend(pattern_recommendations(password));
        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_weights_sum_to_one() {
        let w = StrengthScorer::default().weights();
        assert!(approx(w.length + w.variety + w.complexity, 1.0));
    }

    #[test]
    fn test_round_score_two_decimals() {
        assert_eq!(round_score(0.26999999999999996 + 0.18 + 0.4), 0.85);
        assert_eq!(round_score(0.125), 0.12);
        assert_eq!(round_score(0.135), 0.14);
    }

    #[test]
    fn test_short_password() {
        let scorer = StrengthScorer::default();
        let details = scorer.get_strength_details("short");
        assert_eq!(details.length_score, 0.0);
        assert_eq!(details.variety_score, 0.25);
        assert_eq!(details.complexity_score, 1.0);
        assert_eq!(details.validation_errors.len(), 4);
        assert!(!details.is_valid);
        // 0.25 * 0.4 + 1.0 * 0.3 lands exactly on the Medium threshold
        assert_eq!(details.overall_score, 0.4);
        assert_eq!(details.category, StrengthCategory::Medium);
    }

    #[test]
    fn test_password123() {
        let scorer = StrengthScorer::default();
        let details = scorer.get_strength_details("Password123");
        assert_eq!(details.length_score, 0.6);
        assert_eq!(details.variety_score, 0.75);
        assert!(!details.is_valid);
        assert_eq!(
            details.validation_errors,
            vec!["Password must contain at least one special character".to_string()]
        );
        assert_eq!(details.overall_score, 0.75);
        assert_eq!(details.category, StrengthCategory::Strong);
    }

    #[test]
    fn test_strong_password() {
        let scorer = StrengthScorer::default();
        let details = scorer.get_strength_details("Tr0ub4dor&3XyZ");
        assert_eq!(details.length_score, 0.8);
        assert_eq!(details.variety_score, 1.0);
        assert_eq!(details.complexity_score, 1.0);
        assert_eq!(details.overall_score, 0.94);
        assert_eq!(details.category, StrengthCategory::Strong);
        assert!(details.is_valid);
        assert!(details.validation_errors.is_empty());
    }

    #[test]
    fn test_empty_password() {
        let scorer = StrengthScorer::default();
        let details = scorer.get_strength_details("");
        assert_eq!(details.length_score, 0.0);
        assert_eq!(details.variety_score, 0.0);
        assert_eq!(details.complexity_score, 1.0);
        assert_eq!(details.overall_score, 0.3);
        assert_eq!(details.category, StrengthCategory::Weak);
        assert_eq!(details.validation_errors.len(), 5);

        let recommendations = scorer.get_strength_recommendations("");
        assert_eq!(
            recommendations.first().map(String::as_str),
            Some("Consider using a longer password (12+ characters)")
        );
        assert_eq!(recommendations.len(), 5);
    }

    #[test]
    fn test_repeats_penalized_once() {
        let scorer = StrengthScorer::default();
        let details = scorer.get_strength_details("aaaAAA111!!!");
        assert!(approx(details.complexity_score, 0.9));
        assert_eq!(details.overall_score, 0.85);
        assert_eq!(details.category, StrengthCategory::Strong);
        assert_eq!(
            scorer.get_strength_recommendations("aaaAAA111!!!"),
            vec!["Avoid repeating characters".to_string()]
        );
    }

    #[test]
    fn test_sequence_lowers_overall() {
        let scorer = StrengthScorer::default();
        assert_eq!(scorer.calculate_overall_score("abc"), 0.34);
        assert_eq!(
            scorer.get_strength_category(scorer.calculate_overall_score("abc")),
            StrengthCategory::Weak
        );
    }

    #[test]
    fn test_recommendations_full_order() {
        let scorer = StrengthScorer::default();
        assert_eq!(
            scorer.get_strength_recommendations("Password123"),
            vec![
                "Consider using a longer password (12+ characters)".to_string(),
                "Add special characters".to_string(),
                "Avoid sequential characters".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_recommendations() {
        let scorer = StrengthScorer::default();
        assert!(scorer.get_strength_recommendations("Gq7!mR2#vLp9").is_empty());
    }

    #[test]
    fn test_custom_validator_affects_validity_only() {
        let scorer = StrengthScorer::new(PasswordValidator::new(16));
        let details = scorer.get_strength_details("Tr0ub4dor&3XyZ");
        assert!(!details.is_valid);
        assert_eq!(details.length_score, 0.8);
        assert_eq!(details.overall_score, 0.94);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let scorer = StrengthScorer::default();
        for pwd in ["", "short", "Password123", "aaaAAA111!!!"] {
            assert_eq!(scorer.get_strength_details(pwd), scorer.get_strength_details(pwd));
            assert_eq!(
                scorer.get_strength_recommendations(pwd),
                scorer.get_strength_recommendations(pwd)
            );
        }
    }
}
