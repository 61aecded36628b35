//! Result records produced by validation and strength scoring.
//!
//! Every record here is built fresh for a single evaluation and never holds
//! the password itself.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer, ser::SerializeMap};

/// One of the five composition rules checked by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    SpecialChar,
}

impl Rule {
    /// All rules in evaluation order.
    pub const ALL: [Rule; 5] = [
        Rule::Length,
        Rule::Uppercase,
        Rule::Lowercase,
        Rule::Digit,
        Rule::SpecialChar,
    ];

    /// Stable key used in summaries and serialized output.
    pub fn key(&self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::Uppercase => "uppercase",
            Rule::Lowercase => "lowercase",
            Rule::Digit => "digit",
            Rule::SpecialChar => "special_char",
        }
    }
}

/// Pass/fail for each of the five rules. All five are always populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationSummary {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special_char: bool,
}

impl ValidationSummary {
    pub fn get(&self, rule: Rule) -> bool {
        match rule {
            Rule::Length => self.length,
            Rule::Uppercase => self.uppercase,
            Rule::Lowercase => self.lowercase,
            Rule::Digit => self.digit,
            Rule::SpecialChar => self.special_char,
        }
    }

    /// Iterates `(rule, passed)` pairs in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, bool)> + '_ {
        Rule::ALL.iter().map(move |&rule| (rule, self.get(rule)))
    }

    pub fn failed_count(&self) -> usize {
        self.iter().filter(|(_, passed)| !passed).count()
    }
}

#[cfg(feature = "serde")]
impl Serialize for ValidationSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Rule::ALL.len()))?;
        for (rule, passed) in self.iter() {
            map.serialize_entry(rule.key(), &passed)?;
        }
        map.end()
    }
}

/// Three-tier discretization of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum StrengthCategory {
    Weak,
    Medium,
    Strong,
}

impl StrengthCategory {
    /// Lower bound (inclusive) of `Medium`.
    pub const MEDIUM_THRESHOLD: f64 = 0.4;
    /// Lower bound (inclusive) of `Strong`.
    pub const STRONG_THRESHOLD: f64 = 0.7;

    pub fn from_score(score: f64) -> Self {
        if score < Self::MEDIUM_THRESHOLD {
            StrengthCategory::Weak
        } else if score < Self::STRONG_THRESHOLD {
            StrengthCategory::Medium
        } else {
            StrengthCategory::Strong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthCategory::Weak => "Weak",
            StrengthCategory::Medium => "Medium",
            StrengthCategory::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted scoring breakdown for a single password.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StrengthDetails {
    pub length_score: f64,
    pub variety_score: f64,
    pub complexity_score: f64,
    /// Rounded to two decimals (ties to even).
    pub overall_score: f64,
    pub category: StrengthCategory,
    pub is_valid: bool,
    pub validation_errors: Vec<String>,
}

/// Per-class character counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CharacterBreakdown {
    pub length: usize,
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    pub special: usize,
    /// Characters outside every class above (whitespace, non-ASCII, ...).
    pub other: usize,
}

/// Everything a front end needs to present one evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PasswordReport {
    pub breakdown: CharacterBreakdown,
    pub summary: ValidationSummary,
    pub details: StrengthDetails,
    pub recommendations: Vec<String>,
}
