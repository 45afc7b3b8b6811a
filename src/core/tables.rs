//! Static linguistic data for Greek personal names
//!
//! Ending tables, the transliteration maps, the common-name dictionary and the
//! correction dictionary. Everything is built once into [`KnowledgeTables`] and
//! only read afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::types::{Gender, GrammaticalCase};

/// Gender endings, Greek then Latin, in evaluation order
const GENDER_ENDINGS: &[(Gender, &[&str], &[&str])] = &[
    (
        Gender::Masculine,
        &["ος", "ης", "ας", "ούς", "ής", "άς", "ων", "ών"],
        &["os", "is", "as", "ous", "on"],
    ),
    (
        Gender::Feminine,
        &["α", "η", "ω", "ού", "ής", "ά"],
        &["a", "i", "o", "ou", "is"],
    ),
    (
        Gender::Neuter,
        &["ο", "ι", "υ", "άκι", "ούδι"],
        &["o", "i", "y", "aki", "oudi"],
    ),
];

/// Case endings per gender. The first ending of each list is the one appended
/// when declining into that case.
const CASE_ENDINGS: &[(GrammaticalCase, [(Gender, &[&str]); 3])] = &[
    (
        GrammaticalCase::Nominative,
        [
            (Gender::Masculine, &["ος", "ης", "ας"]),
            (Gender::Feminine, &["α", "η", "ω"]),
            (Gender::Neuter, &["ο", "ι", "υ"]),
        ],
    ),
    (
        GrammaticalCase::Genitive,
        [
            (Gender::Masculine, &["ου", "η", "α"]),
            (Gender::Feminine, &["ας", "ης", "ως"]),
            (Gender::Neuter, &["ου", "ιού", "υ"]),
        ],
    ),
    (
        GrammaticalCase::Accusative,
        [
            (Gender::Masculine, &["ο", "η", "α"]),
            (Gender::Feminine, &["α", "η", "ω"]),
            (Gender::Neuter, &["ο", "ι", "υ"]),
        ],
    ),
    (
        GrammaticalCase::Vocative,
        [
            (Gender::Masculine, &["ε", "η", "α"]),
            (Gender::Feminine, &["α", "η", "ω"]),
            (Gender::Neuter, &["ο", "ι", "υ"]),
        ],
    ),
];

/// Greek -> Latin letter images. Registration order matters: the reverse map
/// keeps the first Greek letter seen for each Latin key.
#[rustfmt::skip]
const GREEK_TO_LATIN: &[(char, &str)] = &[
    ('Α', "A"), ('α', "a"), ('Β', "B"), ('β', "b"), ('Γ', "G"), ('γ', "g"),
    ('Δ', "D"), ('δ', "d"), ('Ε', "E"), ('ε', "e"), ('Ζ', "Z"), ('ζ', "z"),
    ('Η', "I"), ('η', "i"), ('Θ', "Th"), ('θ', "th"), ('Ι', "I"), ('ι', "i"),
    ('Κ', "K"), ('κ', "k"), ('Λ', "L"), ('λ', "l"), ('Μ', "M"), ('μ', "m"),
    ('Ν', "N"), ('ν', "n"), ('Ξ', "X"), ('ξ', "x"), ('Ο', "O"), ('ο', "o"),
    ('Π', "P"), ('π', "p"), ('Ρ', "R"), ('ρ', "r"), ('Σ', "S"), ('σ', "s"),
    ('ς', "s"), ('Τ', "T"), ('τ', "t"), ('Υ', "Y"), ('υ', "y"), ('Φ', "F"),
    ('φ', "f"), ('Χ', "Ch"), ('χ', "ch"), ('Ψ', "Ps"), ('ψ', "ps"), ('Ω', "O"),
    ('ω', "o"),
    // tonos / dialytika
    ('Ά', "A"), ('ά', "a"), ('Έ', "E"), ('έ', "e"), ('Ή', "I"), ('ή', "i"),
    ('Ί', "I"), ('ί', "i"), ('Ό', "O"), ('ό', "o"), ('Ύ', "Y"), ('ύ', "y"),
    ('Ώ', "O"), ('ώ', "o"), ('Ϊ', "I"), ('ϊ', "i"), ('Ϋ', "Y"), ('ϋ', "y"),
    ('ΐ', "i"), ('ΰ', "y"),
];

/// Latin -> Greek entries with no Greek -> Latin counterpart
const LATIN_ONLY: &[(char, char)] = &[('v', 'β'), ('V', 'Β')];

/// Digraphs applied before single letters: (lowercase Latin, small Greek, capital Greek)
const DIGRAPHS: &[(&str, char, char)] = &[("th", 'θ', 'Θ'), ("ch", 'χ', 'Χ'), ("ps", 'ψ', 'Ψ')];

/// Whole-name transliterations where letter-by-letter output would be wrong
const NAME_TRANSLITERATIONS: &[(&str, &str)] = &[
    ("giannis", "Γιάννης"),
    ("yiannis", "Γιάννης"),
    ("ioannis", "Ιωάννης"),
    ("maria", "Μαρία"),
    ("nikos", "Νίκος"),
    ("eleni", "Ελένη"),
    ("kostas", "Κώστας"),
    ("sofia", "Σοφία"),
    ("michalis", "Μιχάλης"),
    ("anastasia", "Αναστασία"),
    ("katerina", "Κατερίνα"),
    ("evangelia", "Ευαγγελία"),
    ("dimitris", "Δημήτρης"),
    ("alexandros", "Αλέξανδρος"),
    ("georgios", "Γεώργιος"),
    ("georgio", "Γεώργιος"),
    ("petros", "Πέτρος"),
    ("christos", "Χρήστος"),
    ("panagiotis", "Παναγιώτης"),
    ("vasilis", "Βασίλης"),
    ("georgia", "Γεωργία"),
    ("despoina", "Δέσποινα"),
    ("aikaterini", "Αικατερίνη"),
];

/// Nominative name -> (gender, [genitive, accusative, vocative])
const COMMON_NAMES: &[(&str, Gender, [&str; 3])] = &[
    ("Γιάννης", Gender::Masculine, ["Γιάννη", "Γιάννη", "Γιάννη"]),
    ("Ιωάννης", Gender::Masculine, ["Ιωάννη", "Ιωάννη", "Ιωάννη"]),
    ("Νίκος", Gender::Masculine, ["Νίκου", "Νίκο", "Νίκο"]),
    ("Κώστας", Gender::Masculine, ["Κώστα", "Κώστα", "Κώστα"]),
    ("Μιχάλης", Gender::Masculine, ["Μιχάλη", "Μιχάλη", "Μιχάλη"]),
    ("Δημήτρης", Gender::Masculine, ["Δημήτρη", "Δημήτρη", "Δημήτρη"]),
    ("Αλέξανδρος", Gender::Masculine, ["Αλεξάνδρου", "Αλέξανδρο", "Αλέξανδρε"]),
    ("Γεώργιος", Gender::Masculine, ["Γεωργίου", "Γεώργιο", "Γεώργιε"]),
    ("Πέτρος", Gender::Masculine, ["Πέτρου", "Πέτρο", "Πέτρε"]),
    ("Χρήστος", Gender::Masculine, ["Χρήστου", "Χρήστο", "Χρήστε"]),
    ("Παναγιώτης", Gender::Masculine, ["Παναγιώτη", "Παναγιώτη", "Παναγιώτη"]),
    ("Βασίλης", Gender::Masculine, ["Βασίλη", "Βασίλη", "Βασίλη"]),
    ("Μαρία", Gender::Feminine, ["Μαρίας", "Μαρία", "Μαρία"]),
    ("Ελένη", Gender::Feminine, ["Ελένης", "Ελένη", "Ελένη"]),
    ("Σοφία", Gender::Feminine, ["Σοφίας", "Σοφία", "Σοφία"]),
    ("Αναστασία", Gender::Feminine, ["Αναστασίας", "Αναστασία", "Αναστασία"]),
    ("Κατερίνα", Gender::Feminine, ["Κατερίνας", "Κατερίνα", "Κατερίνα"]),
    ("Ευαγγελία", Gender::Feminine, ["Ευαγγελίας", "Ευαγγελία", "Ευαγγελία"]),
    ("Γεωργία", Gender::Feminine, ["Γεωργίας", "Γεωργία", "Γεωργία"]),
    ("Δέσποινα", Gender::Feminine, ["Δέσποινας", "Δέσποινα", "Δέσποινα"]),
    ("Αικατερίνη", Gender::Feminine, ["Αικατερίνης", "Αικατερίνη", "Αικατερίνη"]),
];

/// Lowercase truncated or declined surface forms -> nominative
const NAME_CORRECTIONS: &[(&str, &str)] = &[
    ("γεώργιο", "Γεώργιος"),
    ("γεώργιου", "Γεώργιος"),
    ("γεωργίου", "Γεώργιος"),
    ("γεώργιε", "Γεώργιος"),
    ("γιάννη", "Γιάννης"),
    ("γιάννου", "Γιάννης"),
    ("γιάννε", "Γιάννης"),
    ("νίκο", "Νίκος"),
    ("νίκου", "Νίκος"),
    ("νίκε", "Νίκος"),
    ("κώστα", "Κώστας"),
    ("κώστας", "Κώστας"),
    ("πέτρο", "Πέτρος"),
    ("πέτρου", "Πέτρος"),
    ("πέτρε", "Πέτρος"),
    ("χρήστο", "Χρήστος"),
    ("χρήστου", "Χρήστος"),
    ("χρήστε", "Χρήστος"),
    ("αλέξανδρο", "Αλέξανδρος"),
    ("αλεξάνδρου", "Αλέξανδρος"),
    ("αλέξανδρε", "Αλέξανδρος"),
    ("μαρί", "Μαρία"),
    ("μαρίας", "Μαρία"),
    ("ελένη", "Ελένη"),
    ("ελένης", "Ελένη"),
    ("σοφία", "Σοφία"),
    ("σοφίας", "Σοφία"),
];

/// A recognised name: its gender and declined forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub gender: Gender,
    /// [genitive, accusative, vocative]
    pub variants: [&'static str; 3],
}

impl DictionaryEntry {
    /// Declined form for `case`; the nominative is the dictionary key itself
    pub fn variant(&self, case: GrammaticalCase) -> Option<&'static str> {
        case.variant_index().map(|i| self.variants[i])
    }
}

static SHARED: LazyLock<KnowledgeTables> = LazyLock::new(KnowledgeTables::new);

/// Read-only lookup tables for the whole engine
#[derive(Debug)]
pub struct KnowledgeTables {
    greek_to_latin: HashMap<char, &'static str>,
    latin_to_greek: HashMap<char, char>,
    name_transliterations: HashMap<&'static str, &'static str>,
    common_names: HashMap<&'static str, DictionaryEntry>,
    name_corrections: HashMap<&'static str, &'static str>,
}

impl Default for KnowledgeTables {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeTables {
    /// Build every map eagerly
    pub fn new() -> Self {
        let greek_to_latin: HashMap<char, &'static str> = GREEK_TO_LATIN.iter().copied().collect();

        // Single-letter images only; th/ch/ps go through the digraph layer.
        let mut latin_to_greek = HashMap::new();
        for &(greek, latin) in GREEK_TO_LATIN {
            let mut chars = latin.chars();
            if let (Some(l), None) = (chars.next(), chars.next()) {
                latin_to_greek.entry(l).or_insert(greek);
            }
        }
        for &(latin, greek) in LATIN_ONLY {
            latin_to_greek.entry(latin).or_insert(greek);
        }

        let common_names = COMMON_NAMES
            .iter()
            .map(|&(name, gender, variants)| (name, DictionaryEntry { gender, variants }))
            .collect();

        log::debug!(
            "knowledge tables built: {} letters, {} names, {} corrections",
            greek_to_latin.len(),
            COMMON_NAMES.len(),
            NAME_CORRECTIONS.len()
        );

        Self {
            greek_to_latin,
            latin_to_greek,
            name_transliterations: NAME_TRANSLITERATIONS.iter().copied().collect(),
            common_names,
            name_corrections: NAME_CORRECTIONS.iter().copied().collect(),
        }
    }

    /// Process-wide instance
    pub fn shared() -> &'static KnowledgeTables {
        &SHARED
    }

    /// Greek endings of each gender, in evaluation order
    pub fn gender_endings(&self) -> impl Iterator<Item = (Gender, &'static [&'static str])> {
        GENDER_ENDINGS.iter().map(|&(gender, greek, _)| (gender, greek))
    }

    /// Latin endings of each gender, in evaluation order
    pub fn latin_gender_endings(&self) -> impl Iterator<Item = (Gender, &'static [&'static str])> {
        GENDER_ENDINGS.iter().map(|&(gender, _, latin)| (gender, latin))
    }

    /// Endings registered for `case` and `gender` (empty for unknown tags)
    pub fn case_endings(&self, case: GrammaticalCase, gender: Gender) -> &'static [&'static str] {
        CASE_ENDINGS
            .iter()
            .find(|(c, _)| *c == case)
            .and_then(|(_, per_gender)| per_gender.iter().find(|(g, _)| *g == gender))
            .map(|&(_, endings)| endings)
            .unwrap_or(&[])
    }

    pub fn latin_for(&self, greek: char) -> Option<&'static str> {
        self.greek_to_latin.get(&greek).copied()
    }

    pub fn greek_for(&self, latin: char) -> Option<char> {
        self.latin_to_greek.get(&latin).copied()
    }

    pub fn digraphs(&self) -> &'static [(&'static str, char, char)] {
        DIGRAPHS
    }

    /// Whole-name transliteration, matched ignoring letter case
    pub fn name_transliteration(&self, latin: &str) -> Option<&'static str> {
        self.name_transliterations.get(latin.to_lowercase().as_str()).copied()
    }

    pub fn common_name(&self, name: &str) -> Option<&DictionaryEntry> {
        self.common_names.get(name)
    }

    pub fn is_common_name(&self, name: &str) -> bool {
        self.common_names.contains_key(name)
    }

    /// Iterate dictionary entries (unordered)
    pub fn common_names(&self) -> impl Iterator<Item = (&'static str, &DictionaryEntry)> {
        self.common_names.iter().map(|(name, entry)| (*name, entry))
    }

    /// Canonical nominative for a lowercase surface form
    pub fn correction(&self, lowercase: &str) -> Option<&'static str> {
        self.name_corrections.get(lowercase).copied()
    }

    /// Greek letters with a single-character Latin image
    pub fn single_letter_images(&self) -> impl Iterator<Item = (char, char)> + '_ {
        GREEK_TO_LATIN.iter().filter_map(|&(greek, latin)| {
            let mut chars = latin.chars();
            match (chars.next(), chars.next()) {
                (Some(l), None) => Some((greek, l)),
                _ => None,
            }
        })
    }
}
