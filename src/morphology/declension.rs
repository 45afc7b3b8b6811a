//! Case transformation

use crate::core::{Gender, GrammaticalCase, KnowledgeTables};

/// Rewrite `name` from `from` into `to`
///
/// Dictionary names use their recorded variants. Other names lose their
/// longest `from` ending and take the first registered `to` ending. When no
/// `from` ending matches, the whole name is kept as the stem, so malformed
/// input can come out with a doubled-looking ending.
pub fn transform_to_case(
    tables: &KnowledgeTables,
    name: &str,
    gender: Gender,
    from: GrammaticalCase,
    to: GrammaticalCase,
) -> String {
    if from == to || !gender.is_known() || to == GrammaticalCase::Unknown {
        return name.to_string();
    }

    if let Some(entry) = tables.common_name(name) {
        let declined = entry.variant(to).unwrap_or(name);
        log::debug!("{} -> {} ({}, dictionary)", name, declined, to);
        return declined.to_string();
    }

    let stem = strip_case_ending(tables, name, gender, from);
    let ending = tables.case_endings(to, gender).first().copied().unwrap_or("");
    log::debug!("{} -> {}{} ({}, rule)", name, stem, ending, to);

    format!("{}{}", stem, ending)
}

/// Remove the longest `case` ending registered for `gender`
pub fn strip_case_ending<'a>(
    tables: &KnowledgeTables,
    name: &'a str,
    gender: Gender,
    case: GrammaticalCase,
) -> &'a str {
    tables
        .case_endings(case, gender)
        .iter()
        .filter(|ending| name.ends_with(*ending))
        .max_by_key(|ending| ending.len())
        .map_or(name, |ending| &name[..name.len() - ending.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> &'static KnowledgeTables {
        KnowledgeTables::shared()
    }

    #[test]
    fn test_same_case_is_identity() {
        for (name, entry) in tables().common_names() {
            let result = transform_to_case(
                tables(),
                name,
                entry.gender,
                GrammaticalCase::Nominative,
                GrammaticalCase::Nominative,
            );
            assert_eq!(result, name);
        }
    }

    #[test]
    fn test_unknown_gender_is_identity() {
        let result = transform_to_case(
            tables(),
            "Ζωή",
            Gender::Unknown,
            GrammaticalCase::Nominative,
            GrammaticalCase::Genitive,
        );
        assert_eq!(result, "Ζωή");
    }

    #[test]
    fn test_dictionary_variants() {
        let genitive = transform_to_case(
            tables(),
            "Γιάννης",
            Gender::Masculine,
            GrammaticalCase::Nominative,
            GrammaticalCase::Genitive,
        );
        assert_eq!(genitive, "Γιάννη");

        let accusative = transform_to_case(
            tables(),
            "Αλέξανδρος",
            Gender::Masculine,
            GrammaticalCase::Nominative,
            GrammaticalCase::Accusative,
        );
        assert_eq!(accusative, "Αλέξανδρο");

        let vocative = transform_to_case(
            tables(),
            "Μαρία",
            Gender::Feminine,
            GrammaticalCase::Nominative,
            GrammaticalCase::Vocative,
        );
        assert_eq!(vocative, "Μαρία");
    }

    #[test]
    fn test_rule_path() {
        let genitive = transform_to_case(
            tables(),
            "Γιώργος",
            Gender::Masculine,
            GrammaticalCase::Nominative,
            GrammaticalCase::Genitive,
        );
        assert_eq!(genitive, "Γιώργου");

        let vocative = transform_to_case(
            tables(),
            "Γιώργος",
            Gender::Masculine,
            GrammaticalCase::Nominative,
            GrammaticalCase::Vocative,
        );
        assert_eq!(vocative, "Γιώργε");

        let genitive = transform_to_case(
            tables(),
            "Ιωάννα",
            Gender::Feminine,
            GrammaticalCase::Nominative,
            GrammaticalCase::Genitive,
        );
        assert_eq!(genitive, "Ιωάννας");

        let nominative = transform_to_case(
            tables(),
            "Γιώργου",
            Gender::Masculine,
            GrammaticalCase::Genitive,
            GrammaticalCase::Nominative,
        );
        assert_eq!(nominative, "Γιώργος");
    }

    #[test]
    fn test_unmatched_stem_keeps_whole_name() {
        let genitive = transform_to_case(
            tables(),
            "Ξενοφών",
            Gender::Masculine,
            GrammaticalCase::Nominative,
            GrammaticalCase::Genitive,
        );
        assert_eq!(genitive, "Ξενοφώνου");
    }

    #[test]
    fn test_strip_longest_ending() {
        // neuter genitive lists both "ου" and "ιού"
        assert_eq!(
            strip_case_ending(tables(), "Παιδιού", Gender::Neuter, GrammaticalCase::Genitive),
            "Παιδ"
        );
        // "ου" wins over "υ"
        assert_eq!(
            strip_case_ending(tables(), "Αγγέλου", Gender::Neuter, GrammaticalCase::Genitive),
            "Αγγέλ"
        );
        assert_eq!(
            strip_case_ending(tables(), "Γιώργος", Gender::Masculine, GrammaticalCase::Nominative),
            "Γιώργ"
        );
        assert_eq!(
            strip_case_ending(tables(), "Ξενοφών", Gender::Masculine, GrammaticalCase::Nominative),
            "Ξενοφών"
        );
    }
}
