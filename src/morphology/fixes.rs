//! Conservative spelling repair

use crate::core::Gender;

/// Repair a feminine name ending in "ι", the usual misreading of Latin "i"
/// for "η". Nothing else is touched.
pub fn fix_common_errors(name: &str, gender: Gender) -> String {
    if gender == Gender::Feminine {
        if let Some(stem) = name.strip_suffix('ι') {
            return format!("{}η", stem);
        }
    }
    name.to_string()
}
