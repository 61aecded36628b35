//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use crate::types::Rule;
use crate::validator::PasswordValidator;

const CLASS_RULES: [Rule; 4] = [Rule::Uppercase, Rule::Lowercase, Rule::Digit, Rule::SpecialChar];

/// Fraction of the four character classes present in the password.
///
/// Always one of 0.0, 0.25, 0.5, 0.75 or 1.0.
pub fn variety_score(validator: &PasswordValidator, password: &str) -> f64 {
    let present = CLASS_RULES
        .iter()
        .filter(|&&rule| validator.check(rule, password))
        .count();
    present as f64 / CLASS_RULES.len() as f64
}

/// One piece of advice per missing character class, in class order.
pub fn variety_recommendations(validator: &PasswordValidator, password: &str) -> Vec<String> {
    CLASS_RULES
        .iter()
        .filter(|&&rule| !validator.check(rule, password))
        .map(|&rule| class_advice(rule).to_string())
        .collect()
}

fn class_advice(rule: Rule) -> &'static str {
    match rule {
        Rule::Uppercase => "Add uppercase letters",
        Rule::Lowercase => "Add lowercase letters",
        Rule::Digit => "Add numbers",
        Rule::SpecialChar => "Add special characters",
        Rule::Length => unreachable!("length is not a character class"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_score_steps() {
        let v = PasswordValidator::default();
        assert_eq!(variety_score(&v, ""), 0.0);
        assert_eq!(variety_score(&v, "short"), 0.25);
        assert_eq!(variety_score(&v, "Short"), 0.5);
        assert_eq!(variety_score(&v, "Password123"), 0.75);
        assert_eq!(variety_score(&v, "HasAll123!@#"), 1.0);
    }

    #[test]
    fn test_variety_ignores_length_rule() {
        let v = PasswordValidator::new(100);
        assert_eq!(variety_score(&v, "aB3$"), 1.0);
    }

    #[test]
    fn test_variety_recommendations_missing_uppercase() {
        let v = PasswordValidator::default();
        assert_eq!(
            variety_recommendations(&v, "lowercase123!"),
            vec!["Add uppercase letters".to_string()]
        );
    }

    #[test]
    fn test_variety_recommendations_missing_all() {
        let v = PasswordValidator::default();
        assert_eq!(
            variety_recommendations(&v, "   "),
            vec![
                "Add uppercase letters".to_string(),
                "Add lowercase letters".to_string(),
                "Add numbers".to_string(),
                "Add special characters".to_string(),
            ]
        );
    }

    #[test]
    fn test_class_advice_is_distinct_per_class() {
        let advice: Vec<_> = CLASS_RULES.iter().map(|&rule| class_advice(rule)).collect();
        assert_eq!(
            advice,
            vec![
                "Add uppercase letters",
                "Add lowercase letters",
                "Add numbers",
                "Add special characters",
            ]
        );
    }

    #[test]
    #[should_panic(expected = "length is not a character class")]
    fn test_class_advice_rejects_length() {
        class_advice(Rule::Length);
    }

    #[test]
    fn test_variety_recommendations_all_categories() {
        let v = PasswordValidator::default();
        assert!(variety_recommendations(&v, "HasAll123!@#").is_empty());
    }
}
