//! Password evaluator - assembles a full report for one password.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::scorer::StrengthScorer;
use crate::types::PasswordReport;

/// Delay before an async evaluation runs, so rapid keystrokes can cancel it.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates password strength and returns a complete report.
///
/// The secret is exposed only for the duration of this call and is never
/// copied into the report.
pub fn evaluate_password_strength(scorer: &StrengthScorer, password: &SecretString) -> PasswordReport {
    let pwd = password.expose_secret();
    let validator = scorer.validator();

    PasswordReport {
        breakdown: validator.character_breakdown(pwd),
        summary: validator.get_validation_summary(pwd),
        details: scorer.get_strength_details(pwd),
        recommendations: scorer.get_strength_recommendations(pwd),
    }
}

/// Async version that sends the report via channel after [`DEBOUNCE`].
///
/// Nothing is sent if `token` is cancelled before the debounce elapses.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    scorer: &StrengthScorer,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let report = evaluate_password_strength(scorer, password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StrengthCategory;
    use crate::validator::PasswordValidator;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_report_for_weak_password() {
        let scorer = StrengthScorer::default();
        let report = evaluate_password_strength(&scorer, &secret("abc"));

        assert_eq!(report.details.category, StrengthCategory::Weak);
        assert_eq!(report.breakdown.length, 3);
        assert_eq!(report.breakdown.lowercase, 3);
        assert!(!report.summary.length);
        assert!(report.summary.lowercase);
        assert_eq!(
            report.details.validation_errors.len(),
            report.summary.failed_count()
        );
        assert!(!report.recommendations.is_empty());
    }

    #[test]
    fn test_report_for_strong_password() {
        let scorer = StrengthScorer::default();
        let report = evaluate_password_strength(&scorer, &secret("Gq7!mR2#vLp9"));

        assert_eq!(report.details.category, StrengthCategory::Strong);
        assert!(report.details.is_valid);
        assert_eq!(report.summary.failed_count(), 0);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_report_uses_scorer_validator() {
        let scorer = StrengthScorer::new(PasswordValidator::new(20));
        let report = evaluate_password_strength(&scorer, &secret("Gq7!mR2#vLp9"));

        assert!(!report.summary.length);
        assert!(!report.details.is_valid);
    }

    #[test]
    fn test_report_debug_does_not_contain_password() {
        let scorer = StrengthScorer::default();
        let report = evaluate_password_strength(&scorer, &secret("Zq8#unique-marker"));
        assert!(!format!("{report:?}").contains("unique-marker"));
    }
}
