//! Length section - step score over the character count.

/// Passwords shorter than this get the "longer password" advice.
const RECOMMENDED_LENGTH: usize = 12;

/// Scores the password length on a fixed step scale.
///
/// | chars  | score |
/// |--------|-------|
/// | < 8    | 0.0   |
/// | 8-10   | 0.3   |
/// | 11-12  | 0.6   |
/// | 13-16  | 0.8   |
/// | > 16   | 1.0   |
pub fn length_score(password: &str) -> f64 {
    match password.chars().count() {
        0..=7 => 0.0,
        8..=10 => 0.3,
        11..=12 => 0.6,
        13..=16 => 0.8,
        _ => 1.0,
    }
}

/// Returns advice when the password is shorter than the recommended length.
pub fn length_recommendation(password: &str) -> Option<String> {
    if password.chars().count() < RECOMMENDED_LENGTH {
        return Some(format!(
            "Consider using a longer password ({}+ characters)",
            RECOMMENDED_LENGTH
        ));
    }
    None
}
