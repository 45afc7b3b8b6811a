//! Grammatical tags shared by every stage of the pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grammatical gender inferred for a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
    Unknown,
}

impl Gender {
    /// Evaluation order of the gender tables. Earlier genders win on
    /// overlapping endings.
    pub const ORDERED: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
            Gender::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Gender::Unknown)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "masculine" => Ok(Gender::Masculine),
            "feminine" => Ok(Gender::Feminine),
            "neuter" => Ok(Gender::Neuter),
            "unknown" => Ok(Gender::Unknown),
            other => Err(format!("unknown gender: {}", other)),
        }
    }
}

/// Grammatical case of a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammaticalCase {
    Nominative,
    Genitive,
    Accusative,
    Vocative,
    Unknown,
}

impl GrammaticalCase {
    /// Table order used when identifying a case
    pub const ORDERED: [GrammaticalCase; 4] = [
        GrammaticalCase::Nominative,
        GrammaticalCase::Genitive,
        GrammaticalCase::Accusative,
        GrammaticalCase::Vocative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrammaticalCase::Nominative => "nominative",
            GrammaticalCase::Genitive => "genitive",
            GrammaticalCase::Accusative => "accusative",
            GrammaticalCase::Vocative => "vocative",
            GrammaticalCase::Unknown => "unknown",
        }
    }

    /// Position of this case in a dictionary entry's variant list
    /// (genitive, accusative, vocative). The nominative is the entry key.
    pub fn variant_index(&self) -> Option<usize> {
        match self {
            GrammaticalCase::Genitive => Some(0),
            GrammaticalCase::Accusative => Some(1),
            GrammaticalCase::Vocative => Some(2),
            GrammaticalCase::Nominative | GrammaticalCase::Unknown => None,
        }
    }
}

impl fmt::Display for GrammaticalCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrammaticalCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nominative" => Ok(GrammaticalCase::Nominative),
            "genitive" => Ok(GrammaticalCase::Genitive),
            "accusative" => Ok(GrammaticalCase::Accusative),
            "vocative" => Ok(GrammaticalCase::Vocative),
            "unknown" => Ok(GrammaticalCase::Unknown),
            other => Err(format!("unknown grammatical case: {}", other)),
        }
    }
}
