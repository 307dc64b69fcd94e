use mixcheck_data::{HazardStatus, Verdict};
use serde::Serialize;

use crate::db::MixtureDb;
use crate::knowledge::UNKNOWN;
use crate::normalize::normalize;
use crate::pair::PairKey;

/// Outcome of checking one pair of chemicals.
///
/// `known` is true only when the exact pair is in the rule table; the
/// generic caution and unknown verdicts report `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub known: bool,
    pub status: HazardStatus,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub risk: u8,
    pub hazard_type: &'static str,
}

impl AnalysisResult {
    fn from_verdict(verdict: &Verdict, known: bool) -> Self {
        AnalysisResult {
            known,
            status: verdict.status,
            title: verdict.title,
            description: verdict.description,
            details: verdict.details,
            risk: verdict.risk,
            hazard_type: verdict.hazard_type,
        }
    }
}

impl MixtureDb {
    /// Classify a mixture of two chemicals given by free-text name.
    ///
    /// Returns `None` when either name is blank after normalization.
    /// Otherwise the first of these applies: an exact rule for the
    /// pair, a caution rule for a strong reagent in the pair, or the
    /// generic unknown-combination verdict.
    ///
    /// # Examples
    /// ```
    /// use mixcheck::{HazardStatus, MixtureDb};
    ///
    /// let db = MixtureDb::new();
    /// let result = db.analyze("Bleach", "Ammonia").unwrap();
    /// assert_eq!(result.status, HazardStatus::Danger);
    /// assert_eq!(result.risk, 10);
    /// assert!(db.analyze("Bleach", "  ").is_none());
    /// ```
    pub fn analyze(&self, first: &str, second: &str) -> Option<AnalysisResult> {
        let a = normalize(first);
        let b = normalize(second);
        if a.is_empty() || b.is_empty() {
            return None;
        }

        let key = PairKey::new(a, b);

        let result = if let Some(rule) = self.rule_for(&key) {
            AnalysisResult::from_verdict(&rule.verdict, true)
        } else if let Some(caution) = self.caution_for(&key) {
            AnalysisResult::from_verdict(&caution.verdict, false)
        } else {
            AnalysisResult::from_verdict(&UNKNOWN, false)
        };

        tracing::debug!(
            pair = %key,
            status = %result.status,
            risk = result.risk,
            known = result.known,
            "classified mixture"
        );

        Some(result)
    }
}
