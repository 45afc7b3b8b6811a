//! Confidence heuristic

use crate::core::{Gender, KnowledgeTables};

const BASE_CONFIDENCE: f64 = 0.5;
const DICTIONARY_BONUS: f64 = 0.3;
const GENDER_BONUS: f64 = 0.2;

/// Ordinal confidence in [0, 1]: base 0.5, +0.3 for a dictionary name,
/// +0.2 for a known gender. Not a calibrated probability.
pub fn calculate_confidence(tables: &KnowledgeTables, name: &str, gender: Gender) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if tables.is_common_name(name) {
        confidence += DICTIONARY_BONUS;
    }

    if gender.is_known() {
        confidence += GENDER_BONUS;
    }

    confidence.clamp(0.0, 1.0)
}
