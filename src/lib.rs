pub mod config;
pub mod core;
pub mod corrector;
pub mod morphology;

pub use crate::core::{is_greek_script, DictionaryEntry, Gender, GrammaticalCase, KnowledgeTables};
pub use corrector::{
    CorrectionOptions, CorrectionRequest, CorrectionResponse, CorrectionResult, NameCorrector,
    NameError,
};
