//! Gender classification

use crate::core::{Gender, KnowledgeTables};

use super::first_match;

/// Infer the gender of a Greek-script name
///
/// A dictionary entry is authoritative. Otherwise the ending tables are tried
/// in masculine, feminine, neuter order and the first hit wins.
pub fn detect_gender(tables: &KnowledgeTables, name: &str) -> Gender {
    if let Some(entry) = tables.common_name(name) {
        return entry.gender;
    }

    first_match(tables.gender_endings(), name).unwrap_or(Gender::Unknown)
}

/// Infer the gender of a Latin-script name from the Latin ending lists
pub fn detect_gender_latin(tables: &KnowledgeTables, name: &str) -> Gender {
    if let Some(entry) = tables
        .name_transliteration(name)
        .and_then(|greek| tables.common_name(greek))
    {
        return entry.gender;
    }

    let lower = name.to_lowercase();
    first_match(tables.latin_gender_endings(), &lower).unwrap_or(Gender::Unknown)
}
