//! Morphological analysis of Greek names
//!
//! Every classifier here is an ordered rule list: the first tag whose ending
//! list matches wins. Reordering the tables changes results for ambiguous
//! endings such as "α" or "ής".

mod case;
mod confidence;
mod declension;
mod fixes;
mod gender;

pub use case::identify_case;
pub use confidence::calculate_confidence;
pub use declension::{strip_case_ending, transform_to_case};
pub use fixes::fix_common_errors;
pub use gender::{detect_gender, detect_gender_latin};

/// First tag whose endings contain a suffix of `name`
fn first_match<'a, T: Copy>(
    rules: impl IntoIterator<Item = (T, &'a [&'a str])>,
    name: &str,
) -> Option<T> {
    rules
        .into_iter()
        .find(|(_, endings)| endings.iter().any(|ending| name.ends_with(ending)))
        .map(|(tag, _)| tag)
}
