//! Repair of truncated or declined input before analysis

use crate::core::KnowledgeTables;

/// Replace a known misspelled, truncated or declined form with its nominative.
/// The lookup ignores letter case; unknown names come back unchanged.
pub fn apply_corrections(tables: &KnowledgeTables, name: &str) -> String {
    match tables.correction(&name.to_lowercase()) {
        Some(canonical) => {
            log::debug!("corrected {} -> {}", name, canonical);
            canonical.to_string()
        }
        None => name.to_string(),
    }
}
