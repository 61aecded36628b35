//! Password scoring sections
//!
//! Each section scores one aspect of password strength and reports the
//! advice it would give for that aspect.

mod length;
mod pattern;
mod variety;

pub use length::{length_recommendation, length_score};
pub use pattern::{complexity_score, has_repeating_chars, has_sequential_chars, pattern_recommendations};
pub use variety::{variety_recommendations, variety_score};
