//! Helpers for name-search callers

use crate::core::{is_greek_script, Gender};
use crate::morphology::{detect_gender, detect_gender_latin};

use super::corrector::NameCorrector;
use super::options::CorrectionOptions;

impl NameCorrector {
    /// Canonical search string for a first/last name pair
    ///
    /// Each present, non-blank part is corrected with default options and the
    /// `corrected` forms are joined with a single space.
    pub fn normalize_query(&self, first: Option<&str>, last: Option<&str>) -> String {
        let options = CorrectionOptions::default();
        [first, last]
            .into_iter()
            .flatten()
            .filter_map(|part| self.correct_name(part, &options).ok())
            .map(|result| result.corrected)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Gender filter for candidate records: passes when the record's detected
    /// gender equals `gender` or could not be determined
    pub fn matches_gender(&self, record_name: &str, gender: Gender) -> bool {
        let name = record_name.trim();
        let detected = if is_greek_script(name) {
            detect_gender(self.tables(), name)
        } else {
            detect_gender_latin(self.tables(), name)
        };
        detected == gender || detected == Gender::Unknown
    }
}
