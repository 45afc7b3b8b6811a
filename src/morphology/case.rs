//! Grammatical case identification

use crate::core::{Gender, GrammaticalCase, KnowledgeTables};

use super::first_match;

/// Identify the case a name is currently in
///
/// Cases are tried in nominative, genitive, accusative, vocative order with the
/// gender's ending list. A gendered name that matches nothing is taken to be in
/// the nominative already.
pub fn identify_case(tables: &KnowledgeTables, name: &str, gender: Gender) -> GrammaticalCase {
    if !gender.is_known() {
        return GrammaticalCase::Unknown;
    }

    let rules = GrammaticalCase::ORDERED
        .iter()
        .map(|&case| (case, tables.case_endings(case, gender)));

    first_match(rules, name).unwrap_or(GrammaticalCase::Nominative)
}
