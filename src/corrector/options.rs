//! Per-call correction options

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::GrammaticalCase;

/// Options accepted by [`NameCorrector::correct_name`](super::NameCorrector::correct_name)
///
/// Deserializes from the `{targetCase, fixCommonErrors}` shape callers send.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionOptions {
    /// Case to decline into; `None` leaves the case alone
    #[serde(
        default,
        deserialize_with = "lenient_target_case",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_case: Option<GrammaticalCase>,

    /// Run the spelling repair pass
    #[serde(default)]
    pub fix_common_errors: bool,
}

impl CorrectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target_case(mut self, case: GrammaticalCase) -> Self {
        self.target_case = match case {
            GrammaticalCase::Unknown => None,
            declined => Some(declined),
        };
        self
    }

    pub fn with_fix_common_errors(mut self, enabled: bool) -> Self {
        self.fix_common_errors = enabled;
        self
    }
}

/// Unrecognised target cases mean "no transformation" rather than a failed request
fn lenient_target_case<'de, D>(deserializer: D) -> Result<Option<GrammaticalCase>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let case = match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => match s.parse::<GrammaticalCase>() {
            Ok(GrammaticalCase::Unknown) | Err(_) => {
                log::warn!("ignoring unsupported targetCase {:?}", s);
                None
            }
            Ok(case) => Some(case),
        },
        Some(other) => {
            log::warn!("ignoring non-string targetCase {}", other);
            None
        }
    };
    Ok(case)
}
