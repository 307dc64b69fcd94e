#![no_std]

use core::fmt;

use serde::Serialize;

/// Qualitative hazard level reported for a pair of chemicals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardStatus {
    Safe,
    Warning,
    Danger,
    /// No classification available for the pair.
    Neutral,
}

impl HazardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for HazardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payload shown to the user for one outcome.
///
/// `risk` is a fixed score from 1 (very low) to 10 (very high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub status: HazardStatus,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub risk: u8,
    pub hazard_type: &'static str,
}

/// Descriptive entry for a single chemical, keyed by normalized name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChemicalRecord {
    pub key: &'static str,
    pub display: &'static str,
    pub category: &'static str,
    pub hazard: &'static str,
}

/// Known outcome for one unordered pair of normalized names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CombinationRule {
    pub pair: (&'static str, &'static str),
    pub verdict: Verdict,
}

/// Generic verdict for any unlisted pair involving a strong reagent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CautionRule {
    pub reagent: &'static str,
    pub verdict: Verdict,
}

/// A labelled example pair offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub label: &'static str,
    pub first: &'static str,
    pub second: &'static str,
}
