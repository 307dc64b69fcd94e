use mixcheck::{HazardStatus, MixtureDb, PairKey, normalize};

#[test]
fn test_tables_validate() {
    let db = MixtureDb::new();
    assert_eq!(db.validate(), Ok(()));
}

#[test]
fn test_chemical_lookup_normalizes() {
    let db = MixtureDb::new();
    let record = db.chemical("  Baking SODA ").unwrap();
    assert_eq!(record.key, "baking soda");
    assert_eq!(record.display, "Baking Soda (Sodium Bicarbonate)");
    assert_eq!(record.category, "Weak base");
}

#[test]
fn test_unknown_chemical_is_none() {
    let db = MixtureDb::new();
    assert!(db.chemical("Unobtainium").is_none());
    assert!(db.chemical("").is_none());
}

#[test]
fn test_chemical_details_keep_input_order() {
    let db = MixtureDb::new();
    let (first, second) = db.chemical_details("Water", "Salt");
    assert_eq!(first.map(|c| c.key), Some("water"));
    assert!(second.is_none());

    let (first, second) = db.chemical_details("Salt", "bleach");
    assert!(first.is_none());
    assert_eq!(second.map(|c| c.key), Some("bleach"));
}

#[test]
fn test_rule_lookup_either_order() {
    let db = MixtureDb::new();
    let rule = db.rule("Baking Soda", "Vinegar").unwrap();
    assert_eq!(rule.verdict.status, HazardStatus::Safe);
    assert_eq!(
        db.rule("vinegar", "baking soda").map(|r| r.verdict.title),
        Some(rule.verdict.title)
    );
    assert!(db.rule("Salt", "Sugar").is_none());
}

#[test]
fn test_every_rule_is_reachable_through_analyze() {
    let db = MixtureDb::new();
    for rule in db.rules() {
        let result = db.analyze(rule.pair.0, rule.pair.1).unwrap();
        assert!(result.known);
        assert_eq!(result.title, rule.verdict.title);
        assert_eq!(result.risk, rule.verdict.risk);
    }
}

#[test]
fn test_rule_chemicals_have_records() {
    let db = MixtureDb::new();
    for rule in db.rules() {
        assert!(db.chemical(rule.pair.0).is_some(), "{}", rule.pair.0);
        assert!(db.chemical(rule.pair.1).is_some(), "{}", rule.pair.1);
    }
}

#[test]
fn test_caution_reagents_are_warnings() {
    let db = MixtureDb::new();
    let cautions: Vec<_> = db.cautions().collect();
    assert_eq!(cautions.len(), 1);
    assert_eq!(cautions[0].reagent, "concentrated sulfuric acid");
    assert_eq!(cautions[0].verdict.status, HazardStatus::Warning);
}

#[test]
fn test_presets_resolve_to_known_rules() {
    let db = MixtureDb::new();
    let presets = db.presets();
    assert_eq!(presets.len(), 3);
    for preset in presets {
        let result = db.analyze(preset.first, preset.second).unwrap();
        assert!(result.known, "{}", preset.label);
    }
}

#[test]
fn test_pair_key_matches_normalized_inputs() {
    assert_eq!(
        PairKey::new(normalize(" AMMONIA"), normalize("Bleach ")),
        PairKey::new("bleach", "ammonia")
    );
}

#[test]
fn test_chemical_table_size() {
    let db = MixtureDb::new();
    assert_eq!(db.chemicals().count(), 6);
    assert_eq!(db.rules().count(), 3);
}
