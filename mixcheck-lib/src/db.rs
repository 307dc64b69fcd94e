use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use mixcheck_data::{CautionRule, ChemicalRecord, CombinationRule, Preset};

use crate::error::{MixCheckError, Result};
use crate::knowledge::{CAUTIONS, CHEMICALS, COMBINATIONS, PRESETS};
use crate::normalize::normalize;
use crate::pair::PairKey;

struct InitializedDb {
    chemicals: HashMap<&'static str, &'static ChemicalRecord>,
    rules: HashMap<PairKey, &'static CombinationRule>,
}

static DATABASE: OnceLock<InitializedDb> = OnceLock::new();

fn db() -> &'static InitializedDb {
    DATABASE.get_or_init(|| {
        // First entry wins on duplicates; `validate` reports them.
        let mut chemicals = HashMap::with_capacity(CHEMICALS.len());
        for record in CHEMICALS {
            chemicals.entry(record.key).or_insert(record);
        }

        let mut rules = HashMap::with_capacity(COMBINATIONS.len());
        for rule in COMBINATIONS {
            rules
                .entry(PairKey::new(rule.pair.0, rule.pair.1))
                .or_insert(rule);
        }

        tracing::debug!(
            chemicals = chemicals.len(),
            rules = rules.len(),
            cautions = CAUTIONS.len(),
            "indexed knowledge base"
        );

        InitializedDb { chemicals, rules }
    })
}

/// The main interface to the mixture knowledge base.
///
/// Cheap to create: holds a reference to the static tables, which are
/// indexed on first use and never written afterwards.
#[derive(Clone, Copy)]
pub struct MixtureDb {
    db: &'static InitializedDb,
}

impl MixtureDb {
    pub fn new() -> Self {
        MixtureDb { db: db() }
    }

    /// Look up the descriptive record for a single chemical.
    ///
    /// The name is normalized first; an unknown name is `None`.
    pub fn chemical(&self, name: &str) -> Option<&'static ChemicalRecord> {
        self.db.chemicals.get(normalize(name).as_str()).copied()
    }

    /// Records for both inputs, in input order.
    pub fn chemical_details(
        &self,
        first: &str,
        second: &str,
    ) -> (Option<&'static ChemicalRecord>, Option<&'static ChemicalRecord>) {
        (self.chemical(first), self.chemical(second))
    }

    /// The known rule for a pair, regardless of argument order.
    pub fn rule(&self, first: &str, second: &str) -> Option<&'static CombinationRule> {
        self.rule_for(&PairKey::new(normalize(first), normalize(second)))
    }

    pub(crate) fn rule_for(&self, key: &PairKey) -> Option<&'static CombinationRule> {
        self.db.rules.get(key).copied()
    }

    /// First caution rule whose reagent is part of the pair.
    pub(crate) fn caution_for(&self, key: &PairKey) -> Option<&'static CautionRule> {
        CAUTIONS.iter().find(|c| key.contains(c.reagent))
    }

    pub fn chemicals(&self) -> impl Iterator<Item = &'static ChemicalRecord> {
        CHEMICALS.iter()
    }

    pub fn rules(&self) -> impl Iterator<Item = &'static CombinationRule> {
        COMBINATIONS.iter()
    }

    pub fn cautions(&self) -> impl Iterator<Item = &'static CautionRule> {
        CAUTIONS.iter()
    }

    /// Example pairs for the UI to offer.
    pub fn presets(&self) -> &'static [Preset] {
        PRESETS
    }

    /// Check the embedded tables for consistency.
    ///
    /// Keys must be non-empty and normalized, chemicals and unordered
    /// pairs unique, risk scores within [1, 10], and every caution
    /// reagent must have a chemical record.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for record in CHEMICALS {
            check_key(record.key)?;
            if !seen.insert(record.key) {
                return Err(MixCheckError::DuplicateChemical(record.key.to_string()));
            }
        }

        let mut pairs = HashSet::new();
        for rule in COMBINATIONS {
            check_key(rule.pair.0)?;
            check_key(rule.pair.1)?;
            check_risk(rule.verdict.title, rule.verdict.risk)?;
            let key = PairKey::new(rule.pair.0, rule.pair.1);
            if !pairs.insert(key) {
                return Err(MixCheckError::DuplicateRule {
                    first: rule.pair.0.to_string(),
                    second: rule.pair.1.to_string(),
                });
            }
        }

        for caution in CAUTIONS {
            check_key(caution.reagent)?;
            check_risk(caution.verdict.title, caution.verdict.risk)?;
            if !self.db.chemicals.contains_key(caution.reagent) {
                return Err(MixCheckError::UnknownReagent(caution.reagent.to_string()));
            }
        }

        Ok(())
    }
}

impl Default for MixtureDb {
    fn default() -> Self {
        Self::new()
    }
}

fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(MixCheckError::EmptyKey);
    }
    if normalize(key) != key {
        return Err(MixCheckError::UnnormalizedKey(key.to_string()));
    }
    Ok(())
}

fn check_risk(title: &str, risk: u8) -> Result<()> {
    if !(1..=10).contains(&risk) {
        return Err(MixCheckError::RiskOutOfRange {
            title: title.to_string(),
            risk,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_key_rejects_unnormalized() {
        assert_eq!(check_key(""), Err(MixCheckError::EmptyKey));
        assert!(matches!(
            check_key(" Water"),
            Err(MixCheckError::UnnormalizedKey(_))
        ));
        assert!(check_key("water").is_ok());
    }

    #[test]
    fn test_check_risk_bounds() {
        assert!(check_risk("t", 1).is_ok());
        assert!(check_risk("t", 10).is_ok());
        assert!(matches!(
            check_risk("t", 0),
            Err(MixCheckError::RiskOutOfRange { risk: 0, .. })
        ));
        assert!(check_risk("t", 11).is_err());
    }
}
