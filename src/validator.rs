//! Rule-based password validator.
//!
//! Checks a password against five independent composition rules and
//! produces per-rule diagnostics. Character classes are ASCII only.

use crate::types::{CharacterBreakdown, Rule, ValidationSummary};

/// Default minimum password length.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Characters accepted by the special-character rule.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};:\"\\|,.<>/?";

pub(crate) fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Validates passwords against a fixed set of composition rules.
///
/// Holds only its configured minimum length, so a single instance can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordValidator {
    min_length: usize,
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

impl PasswordValidator {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// True if the password has at least `min_length` characters.
    ///
    /// Length is counted in `char`s, not bytes.
    pub fn validate_length(&self, password: &str) -> bool {
        password.chars().count() >= self.min_length
    }

    pub fn validate_uppercase(&self, password: &str) -> bool {
        password.chars().any(|c| c.is_ascii_uppercase())
    }

    pub fn validate_lowercase(&self, password: &str) -> bool {
        password.chars().any(|c| c.is_ascii_lowercase())
    }

    pub fn validate_digit(&self, password: &str) -> bool {
        password.chars().any(|c| c.is_ascii_digit())
    }

    /// True if the password contains a character from [`SPECIAL_CHARS`].
    pub fn validate_special_char(&self, password: &str) -> bool {
        password.chars().any(is_special)
    }

    /// Evaluates a single rule.
    pub fn check(&self, rule: Rule, password: &str) -> bool {
        match rule {
            Rule::Length => self.validate_length(password),
            Rule::Uppercase => self.validate_uppercase(password),
            Rule::Lowercase => self.validate_lowercase(password),
            Rule::Digit => self.validate_digit(password),
            Rule::SpecialChar => self.validate_special_char(password),
        }
    }

    /// Diagnostic shown when `rule` fails.
    pub fn error_message(&self, rule: Rule) -> String {
        match rule {
            Rule::Length => format!(
                "Password must be at least {} characters long",
                self.min_length
            ),
            Rule::Uppercase => "Password must contain at least one uppercase letter".to_string(),
            Rule::Lowercase => "Password must contain at least one lowercase letter".to_string(),
            Rule::Digit => "Password must contain at least one digit".to_string(),
            Rule::SpecialChar => {
                "Password must contain at least one special character".to_string()
            }
        }
    }

    /// One message per failing rule, in rule order.
    pub fn get_validation_errors(&self, password: &str) -> Vec<String> {
        Rule::ALL
            .iter()
            .filter(|&&rule| !self.check(rule, password))
            .map(|&rule| self.error_message(rule))
            .collect()
    }

    pub fn is_valid(&self, password: &str) -> bool {
        self.get_validation_errors(password).is_empty()
    }

    /// Evaluates all five rules without short-circuiting.
    pub fn get_validation_summary(&self, password: &str) -> ValidationSummary {
        ValidationSummary {
            length: self.validate_length(password),
            uppercase: self.validate_uppercase(password),
            lowercase: self.validate_lowercase(password),
            digit: self.validate_digit(password),
            special_char: self.validate_special_char(password),
        }
    }

    /// Counts characters per class.
    pub fn character_breakdown(&self, password: &str) -> CharacterBreakdown {
        password
            .chars()
            .fold(CharacterBreakdown::default(), |mut acc, c| {
                acc.length += 1;
                if c.is_ascii_uppercase() {
                    acc.uppercase += 1;
                } else if c.is_ascii_lowercase() {
                    acc.lowercase += 1;
                } else if c.is_ascii_digit() {
                    acc.digits += 1;
                } else if is_special(c) {
                    acc.special += 1;
                } else {
                    acc.other += 1;
                }
                acc
            })
    }
}
