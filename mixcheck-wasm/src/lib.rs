//! WASM bindings for mixcheck.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p mixcheck-wasm
//! ```

use wasm_bindgen::prelude::*;

use mixcheck::{AnalysisResult, ChemicalRecord, MixtureDb};

fn db() -> MixtureDb {
    MixtureDb::new()
}

fn to_js(e: mixcheck::MixCheckError) -> JsError {
    JsError::new(&e.to_string())
}

// ── Mixture check ──

/// Result of a mixture check, as handed to the page.
#[wasm_bindgen]
pub struct Verdict {
    inner: AnalysisResult,
}

#[wasm_bindgen]
impl Verdict {
    #[wasm_bindgen(getter)]
    pub fn known(&self) -> bool {
        self.inner.known
    }

    /// One of "safe", "warning", "danger", "neutral".
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.inner.status.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.inner.title.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn description(&self) -> String {
        self.inner.description.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn details(&self) -> Vec<String> {
        self.inner.details.iter().map(|d| d.to_string()).collect()
    }

    /// Risk score out of 10.
    #[wasm_bindgen(getter)]
    pub fn risk(&self) -> u8 {
        self.inner.risk
    }

    #[wasm_bindgen(getter, js_name = hazardType)]
    pub fn hazard_type(&self) -> String {
        self.inner.hazard_type.to_string()
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.inner).map_err(|e| JsError::new(&e.to_string()))
    }
}

/// Checks a pair of chemical names.
///
/// Returns `undefined` when either name is blank; the page should ask
/// for both names in that case.
#[wasm_bindgen]
pub fn analyze(first: &str, second: &str) -> Option<Verdict> {
    db().analyze(first, second).map(|inner| Verdict { inner })
}

// ── Chemical details ──

#[wasm_bindgen]
pub struct ChemicalCard {
    record: &'static ChemicalRecord,
}

#[wasm_bindgen]
impl ChemicalCard {
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.record.display.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn category(&self) -> String {
        self.record.category.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn hazard(&self) -> String {
        self.record.hazard.to_string()
    }
}

/// Returns the detail card for one chemical, if it is in the table.
#[wasm_bindgen(js_name = chemicalCard)]
pub fn chemical_card(name: &str) -> Option<ChemicalCard> {
    db().chemical(name).map(|record| ChemicalCard { record })
}

// ── Presets ──

#[wasm_bindgen(js_name = presetLabels)]
pub fn preset_labels() -> Vec<String> {
    db().presets().iter().map(|p| p.label.to_string()).collect()
}

/// Returns [first, second] for the preset at `index`.
#[wasm_bindgen(js_name = presetPair)]
pub fn preset_pair(index: usize) -> Result<Vec<String>, JsError> {
    let preset = db()
        .presets()
        .get(index)
        .ok_or_else(|| JsError::new(&format!("no preset at index {index}")))?;
    Ok(vec![preset.first.to_string(), preset.second.to_string()])
}

/// Verifies the embedded knowledge base.
#[wasm_bindgen(js_name = selfCheck)]
pub fn self_check() -> Result<(), JsError> {
    db().validate().map_err(to_js)
}
