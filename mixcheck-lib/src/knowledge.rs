//! Embedded knowledge base.
//!
//! All keys are normalized (trimmed, lowercase). Pair order inside a
//! `CombinationRule` is irrelevant; the index canonicalizes it.

use mixcheck_data::{CautionRule, ChemicalRecord, CombinationRule, HazardStatus, Preset, Verdict};

pub(crate) const CHEMICALS: &[ChemicalRecord] = &[
    ChemicalRecord {
        key: "bleach",
        display: "Bleach (Sodium Hypochlorite)",
        category: "Strong oxidizer, basic solution",
        hazard: "Corrosive, can release chlorine-based gases with acids or ammonia.",
    },
    ChemicalRecord {
        key: "ammonia",
        display: "Ammonia (NH₃, household cleaner)",
        category: "Weak base, volatile",
        hazard: "Irritating gas, forms toxic chloramine gas with bleach.",
    },
    ChemicalRecord {
        key: "vinegar",
        display: "Vinegar (Acetic acid ~5%)",
        category: "Weak acid",
        hazard: "Mild irritant, generally safe in small lab amounts.",
    },
    ChemicalRecord {
        key: "baking soda",
        display: "Baking Soda (Sodium Bicarbonate)",
        category: "Weak base",
        hazard: "Very low hazard, common in safe demonstrations.",
    },
    ChemicalRecord {
        key: "water",
        display: "Water (H₂O)",
        category: "Solvent",
        hazard: "Usually safe, but mixing with strong acids can release heat.",
    },
    ChemicalRecord {
        key: "concentrated sulfuric acid",
        display: "Concentrated Sulfuric Acid (H₂SO₄)",
        category: "Strong acid, very exothermic with water",
        hazard: "Highly corrosive, causes severe burns, reacts vigorously with water and organics.",
    },
];

pub(crate) const COMBINATIONS: &[CombinationRule] = &[
    CombinationRule {
        pair: ("bleach", "ammonia"),
        verdict: Verdict {
            status: HazardStatus::Danger,
            title: "🚨 Dangerous Combination",
            description: "Bleach and ammonia react to form toxic **chloramine gas** and related compounds.",
            details: &[
                "Can cause serious breathing problems.",
                "Should never be mixed in a lab or at home.",
            ],
            risk: 10,
            hazard_type: "Toxic gas release",
        },
    },
    CombinationRule {
        pair: ("vinegar", "baking soda"),
        verdict: Verdict {
            status: HazardStatus::Safe,
            title: "✅ Safe Demonstration",
            description: "Vinegar (acid) and baking soda (base) react to form **carbon dioxide gas, water, and a salt**.",
            details: &[
                "Common school experiment.",
                "Still use safety goggles and a tray for spills.",
            ],
            risk: 2,
            hazard_type: "Mild foaming reaction",
        },
    },
    CombinationRule {
        pair: ("water", "concentrated sulfuric acid"),
        verdict: Verdict {
            status: HazardStatus::Danger,
            title: "🔥 Exothermic & Hazardous",
            description: "Mixing water and concentrated sulfuric acid releases **a lot of heat**.",
            details: &[
                "Can cause splattering and severe burns.",
                "In real labs, we always **add acid to water**, never water to acid.",
            ],
            risk: 9,
            hazard_type: "Extreme heat (exothermic)",
        },
    },
];

/// Checked in order; the first reagent present in the pair wins.
pub(crate) const CAUTIONS: &[CautionRule] = &[CautionRule {
    reagent: "concentrated sulfuric acid",
    verdict: Verdict {
        status: HazardStatus::Warning,
        title: "⚠️ Use Extreme Caution",
        description: "Concentrated sulfuric acid is very dangerous. Mixing it with other chemicals can release heat or toxic fumes.",
        details: &[
            "Only mix under teacher supervision in a proper lab.",
            "Always use goggles, gloves, and lab coat.",
        ],
        risk: 8,
        hazard_type: "Corrosive / exothermic",
    },
}];

pub(crate) const UNKNOWN: Verdict = Verdict {
    status: HazardStatus::Neutral,
    title: "ℹ️ Unknown Combination",
    description: "This exact mixture is not in the app's safety list.",
    details: &[
        "Always check your lab manual or safety data sheets (SDS).",
        "Ask your teacher or supervisor before mixing.",
    ],
    risk: 5,
    hazard_type: "Not classified by this app",
};

pub(crate) const PRESETS: &[Preset] = &[
    Preset {
        label: "Bleach + Ammonia",
        first: "Bleach",
        second: "Ammonia",
    },
    Preset {
        label: "Vinegar + Baking Soda",
        first: "Vinegar",
        second: "Baking Soda",
    },
    Preset {
        label: "Water + Conc. H₂SO₄",
        first: "Water",
        second: "Concentrated Sulfuric Acid",
    },
];
