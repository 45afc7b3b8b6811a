//! Tags, static tables and script handling

pub mod tables;
pub mod transliterator;
pub mod types;
pub mod unicode;

pub use tables::{DictionaryEntry, KnowledgeTables};
pub use transliterator::{to_greek, to_latin};
pub use types::{Gender, GrammaticalCase};
pub use unicode::is_greek_script;
