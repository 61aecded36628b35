//! Password validation and strength scoring library
//!
//! This library checks passwords against five composition rules and
//! computes a weighted strength score with improvement recommendations.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `cli` (default): Builds the `pwd-checker` binary
//! - `serde`: Enables `Serialize` on result records
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_MIN_LENGTH`: Minimum length required by the validator (default: `8`)
//!
//! # Example
//!
//! ```rust
//! use pwd_checker::{evaluate_password_strength, StrengthCategory, StrengthScorer};
//! use secrecy::SecretString;
//!
//! let scorer = StrengthScorer::default();
//! let password = SecretString::new("Tr0ub4dor&3XyZ".to_string().into());
//!
//! let report = evaluate_password_strength(&scorer, &password);
//!
//! assert_eq!(report.details.overall_score, 0.94);
//! assert_eq!(report.details.category, StrengthCategory::Strong);
//! ```

#[cfg(feature = "cli")]
pub mod cli;

// Internal modules
mod config;
mod evaluator;
mod scorer;
mod sections;
mod types;
mod validator;

// Public API
pub use config::{CheckerConfig, ConfigError, MIN_LENGTH_ENV};
pub use evaluator::evaluate_password_strength;
pub use scorer::{ScoreWeights, StrengthScorer};
pub use sections::{has_repeating_chars, has_sequential_chars};
pub use types::{
    CharacterBreakdown, PasswordReport, Rule, StrengthCategory, StrengthDetails, ValidationSummary,
};
pub use validator::{DEFAULT_MIN_LENGTH, PasswordValidator, SPECIAL_CHARS};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_strength_tx};
