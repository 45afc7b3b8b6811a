//! Greek <-> Latin transliteration
//!
//! Latin -> Greek consults the whole-name table first, then the th/ch/ps
//! digraphs, then single letters. Greek -> Latin is a plain letter map.
//! Characters without a mapping (digits, punctuation, other scripts) are kept.

use super::tables::KnowledgeTables;
use super::unicode::fold_final_sigma;

/// Latin-script name to Greek script
///
/// The Latin -> Greek direction is lossy: `i` always becomes `η` and `o`
/// always becomes `ο`, whatever the original letter was.
pub fn to_greek(tables: &KnowledgeTables, text: &str) -> String {
    if let Some(known) = tables.name_transliteration(text) {
        return known.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        if let Some(greek) = chars.get(i + 1).and_then(|&next| match_digraph(tables, chars[i], next)) {
            result.push(greek);
            i += 2;
            continue;
        }

        let c = chars[i];
        result.push(tables.greek_for(c).unwrap_or(c));
        i += 1;
    }

    fold_final_sigma(&result)
}

/// Greek-script name to Latin script. Total over the Greek alphabet.
pub fn to_latin(tables: &KnowledgeTables, text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match tables.latin_for(c) {
            Some(latin) => result.push_str(latin),
            None => result.push(c),
        }
    }

    result
}

/// A lowercase digraph maps to the small letter, any other casing to the capital
fn match_digraph(tables: &KnowledgeTables, first: char, second: char) -> Option<char> {
    tables.digraphs().iter().find_map(|&(latin, small, capital)| {
        let mut expected = latin.chars();
        let (a, b) = (expected.next()?, expected.next()?);
        if first.to_ascii_lowercase() != a || second.to_ascii_lowercase() != b {
            return None;
        }
        if first == a && second == b {
            Some(small)
        } else {
            Some(capital)
        }
    })
}
