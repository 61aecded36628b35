//! Pattern analysis section - detects repetitive and sequential patterns.

use crate::validator::PasswordValidator;

const REPEAT_PENALTY: f64 = 0.3;
const SEQUENCE_PENALTY: f64 = 0.2;
const MIXED_CASE_BONUS: f64 = 0.1;
const DIGIT_SPECIAL_BONUS: f64 = 0.1;

/// True if any character occurs three or more times in a row.
///
/// Runs of line feeds are not counted.
pub fn has_repeating_chars(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() < 3 {
        return false;
    }

    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] && chars[i] != '\n' {
            repeated_count += 1;
            if repeated_count >= 3 {
                return true;
            }
        } else {
            repeated_count = 1;
        }
    }
    false
}

/// True if the password contains an ascending run of three letters
/// (`abc` .. `xyz`, any case) or three digits (`012` .. `789`).
pub fn has_sequential_chars(password: &str) -> bool {
    let chars: Vec<char> = password
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .collect();

    chars.windows(3).any(|w| {
        let same_class = w.iter().all(|c| c.is_ascii_lowercase())
            || w.iter().all(|c| c.is_ascii_digit());
        same_class && w[1] as u32 == w[0] as u32 + 1 && w[2] as u32 == w[1] as u32 + 1
    })
}

/// Starts at 1.0, applies pattern penalties and diversity bonuses, then
/// clamps to `[0.0, 1.0]`.
pub fn complexity_score(validator: &PasswordValidator, password: &str) -> f64 {
    let mut score = 1.0;

    if has_repeating_chars(password) {
        score -= REPEAT_PENALTY;
    }
    if has_sequential_chars(password) {
        score -= SEQUENCE_PENALTY;
    }
    if validator.validate_uppercase(password) && validator.validate_lowercase(password) {
        score += MIXED_CASE_BONUS;
    }
    if validator.validate_digit(password) && validator.validate_special_char(password) {
        score += DIGIT_SPECIAL_BONUS;
    }

    score.clamp(0.0, 1.0)
}

/// Advice for detected patterns: repeats first, then sequences.
pub fn pattern_recommendations(password: &str) -> Vec<String> {
    let mut recommendations = Vec::new();
    if has_repeating_chars(password) {
        recommendations.push("Avoid repeating characters".to_string());
    }
    if has_sequential_chars(password) {
        recommendations.push("Avoid sequential characters".to_string());
    }
    recommendations
}
