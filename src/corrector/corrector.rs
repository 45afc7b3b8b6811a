//! Name correction pipeline
//!
//! correction dictionary -> script detection -> Latin to Greek ->
//! gender -> case -> declension -> spelling repair -> capitalization -> confidence

use serde::{Deserialize, Serialize};

use crate::core::unicode::capitalize_first;
use crate::core::{is_greek_script, to_greek, to_latin, Gender, GrammaticalCase, KnowledgeTables};
use crate::morphology;

use super::error::NameError;
use super::normalizer::apply_corrections;
use super::options::CorrectionOptions;

/// Outcome of one successful correction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionResult {
    /// Input exactly as received
    pub original: String,
    /// `greek_script` for Greek input, `latin_transliteration` otherwise
    pub corrected: String,
    pub greek_script: String,
    pub latin_transliteration: String,
    pub gender: Gender,
    /// Case identified before any transformation
    pub current_case: GrammaticalCase,
    pub is_greek_script: bool,
    /// Ordinal signal in [0, 1]
    pub confidence: f64,
}

/// Serializable outcome: the result, or `{"error": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectionResponse {
    Corrected(CorrectionResult),
    Rejected { error: String },
}

impl CorrectionResponse {
    pub fn result(&self) -> Option<&CorrectionResult> {
        match self {
            CorrectionResponse::Corrected(result) => Some(result),
            CorrectionResponse::Rejected { .. } => None,
        }
    }

    pub fn corrected(&self) -> Option<&str> {
        self.result().map(|r| r.corrected.as_str())
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CorrectionResponse::Rejected { error } => Some(error),
            CorrectionResponse::Corrected(_) => None,
        }
    }
}

impl From<Result<CorrectionResult, NameError>> for CorrectionResponse {
    fn from(outcome: Result<CorrectionResult, NameError>) -> Self {
        match outcome {
            Ok(result) => CorrectionResponse::Corrected(result),
            Err(e) => CorrectionResponse::Rejected {
                error: e.to_string(),
            },
        }
    }
}

/// `{name, options}` body as an HTTP caller receives it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrectionRequest {
    #[serde(default)]
    pub name: serde_json::Value,
    #[serde(default)]
    pub options: CorrectionOptions,
}

/// Greek name correction engine
///
/// Holds only a reference to the read-only tables, so one instance can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct NameCorrector {
    tables: &'static KnowledgeTables,
}

impl Default for NameCorrector {
    fn default() -> Self {
        Self::new()
    }
}

impl NameCorrector {
    /// Engine over the process-wide tables
    pub fn new() -> Self {
        Self {
            tables: KnowledgeTables::shared(),
        }
    }

    /// Engine over caller-owned tables
    pub fn with_tables(tables: &'static KnowledgeTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'static KnowledgeTables {
        self.tables
    }

    /// Correct, classify and optionally decline one name
    ///
    /// # Examples
    /// ```
    /// use greeknames::{CorrectionOptions, GrammaticalCase, NameCorrector};
    ///
    /// let corrector = NameCorrector::new();
    /// let options = CorrectionOptions::new().with_target_case(GrammaticalCase::Genitive);
    /// let result = corrector.correct_name("Γιάννης", &options).unwrap();
    /// assert_eq!(result.corrected, "Γιάννη");
    /// ```
    pub fn correct_name(
        &self,
        name: &str,
        options: &CorrectionOptions,
    ) -> Result<CorrectionResult, NameError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(NameError::InvalidInput);
        }

        // 1. Known truncations and declined forms back to the nominative
        let working = apply_corrections(self.tables, trimmed);

        // 2. Greek working form
        let is_greek = is_greek_script(&working);
        let greek = if is_greek {
            working
        } else {
            to_greek(self.tables, &working)
        };

        // 3. Gender and current case
        let gender = morphology::detect_gender(self.tables, &greek);
        let current_case = morphology::identify_case(self.tables, &greek, gender);
        log::debug!("{}: {} / {}", greek, gender, current_case);

        // 4. Declension
        let mut final_form = match options.target_case {
            Some(target) if target != current_case && gender.is_known() => {
                morphology::transform_to_case(self.tables, &greek, gender, current_case, target)
            }
            _ => greek.clone(),
        };

        // 5. Spelling repair
        if options.fix_common_errors {
            final_form = morphology::fix_common_errors(&final_form, gender);
        }

        let greek_script = capitalize_first(&final_form);
        let latin_transliteration = capitalize_first(&to_latin(self.tables, &final_form));
        let confidence = morphology::calculate_confidence(self.tables, &greek, gender);

        Ok(CorrectionResult {
            original: name.to_string(),
            corrected: if is_greek {
                greek_script.clone()
            } else {
                latin_transliteration.clone()
            },
            greek_script,
            latin_transliteration,
            gender,
            current_case,
            is_greek_script: is_greek,
            confidence,
        })
    }

    /// Same as [`correct_name`](Self::correct_name) for untyped JSON input.
    /// Anything but a non-blank string is invalid.
    pub fn correct_value(
        &self,
        name: &serde_json::Value,
        options: &CorrectionOptions,
    ) -> Result<CorrectionResult, NameError> {
        match name.as_str() {
            Some(s) => self.correct_name(s, options),
            None => Err(NameError::InvalidInput),
        }
    }

    /// Handle one `{name, options}` request body
    pub fn correct_request(&self, request: &CorrectionRequest) -> CorrectionResponse {
        let response = CorrectionResponse::from(self.correct_value(&request.name, &request.options));
        if let Some(error) = response.error() {
            log::warn!("rejected name {}: {}", request.name, error);
        }
        response
    }

    /// Correct every name; invalid entries become `{"error": ...}` in place
    pub fn correct_batch<I, S>(&self, names: I, options: &CorrectionOptions) -> Vec<CorrectionResponse>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.correct_name(name.as_ref(), options).into())
            .collect()
    }

    pub fn is_greek_script(&self, text: &str) -> bool {
        is_greek_script(text)
    }

    pub fn to_greek(&self, text: &str) -> String {
        to_greek(self.tables, text)
    }

    pub fn to_latin(&self, text: &str) -> String {
        to_latin(self.tables, text)
    }

    pub fn detect_gender(&self, name: &str) -> Gender {
        morphology::detect_gender(self.tables, name)
    }

    pub fn identify_case(&self, name: &str, gender: Gender) -> GrammaticalCase {
        morphology::identify_case(self.tables, name, gender)
    }

    pub fn transform_to_case(
        &self,
        name: &str,
        gender: Gender,
        from: GrammaticalCase,
        to: GrammaticalCase,
    ) -> String {
        morphology::transform_to_case(self.tables, name, gender, from, to)
    }

    pub fn fix_common_errors(&self, name: &str, gender: Gender) -> String {
        morphology::fix_common_errors(name, gender)
    }

    pub fn calculate_confidence(&self, name: &str, gender: Gender) -> f64 {
        morphology::calculate_confidence(self.tables, name, gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_dictionary_name() {
        let corrector = NameCorrector::new();
        let result = corrector
            .correct_name("Γιάννης", &CorrectionOptions::default())
            .unwrap();

        assert_eq!(result.original, "Γιάννης");
        assert_eq!(result.corrected, "Γιάννης");
        assert_eq!(result.greek_script, "Γιάννης");
        assert_eq!(result.latin_transliteration, "Giannis");
        assert_eq!(result.gender, Gender::Masculine);
        assert_eq!(result.current_case, GrammaticalCase::Nominative);
        assert!(result.is_greek_script);
        assert!(result.confidence >= 0.8);
    }

    #[test]
    fn test_latin_input() {
        let corrector = NameCorrector::new();
        let result = corrector
            .correct_name("Giannis", &CorrectionOptions::default())
            .unwrap();

        assert!(!result.is_greek_script);
        assert_eq!(result.greek_script, "Γιάννης");
        assert_eq!(result.corrected, "Giannis");
    }

    #[test]
    fn test_original_is_kept_untrimmed() {
        let corrector = NameCorrector::new();
        let result = corrector
            .correct_name("  Μαρία ", &CorrectionOptions::default())
            .unwrap();
        assert_eq!(result.original, "  Μαρία ");
        assert_eq!(result.corrected, "Μαρία");
    }

    #[test]
    fn test_correction_dictionary_runs_first() {
        let corrector = NameCorrector::new();
        let result = corrector
            .correct_name("γιάννου", &CorrectionOptions::default())
            .unwrap();
        assert_eq!(result.corrected, "Γιάννης");
        assert_eq!(result.current_case, GrammaticalCase::Nominative);
    }

    #[test]
    fn test_lowercase_input_is_capitalized() {
        let corrector = NameCorrector::new();
        let result = corrector
            .correct_name("γιώργος", &CorrectionOptions::default())
            .unwrap();
        assert_eq!(result.greek_script, "Γιώργος");
        assert_eq!(result.latin_transliteration, "Giorgos");
        assert_eq!(result.gender, Gender::Masculine);
    }

    #[test]
    fn test_target_case_rule_path() {
        let corrector = NameCorrector::new();
        let options = CorrectionOptions::new().with_target_case(GrammaticalCase::Genitive);
        let result = corrector.correct_name("Γιώργος", &options).unwrap();
        assert_eq!(result.corrected, "Γιώργου");
        // current case reports the input, not the output
        assert_eq!(result.current_case, GrammaticalCase::Nominative);
    }

    #[test]
    fn test_unknown_gender_skips_transformation() {
        let corrector = NameCorrector::new();
        let options = CorrectionOptions::new().with_target_case(GrammaticalCase::Genitive);
        let result = corrector.correct_name("Ζωή", &options).unwrap();
        assert_eq!(result.corrected, "Ζωή");
        assert_eq!(result.gender, Gender::Unknown);
        assert_eq!(result.current_case, GrammaticalCase::Unknown);
        assert!((result.confidence - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_input() {
        let corrector = NameCorrector::new();
        let options = CorrectionOptions::default();
        assert_eq!(corrector.correct_name("", &options), Err(NameError::InvalidInput));
        assert_eq!(corrector.correct_name("  \t", &options), Err(NameError::InvalidInput));
        assert_eq!(
            corrector.correct_value(&serde_json::json!(123), &options),
            Err(NameError::InvalidInput)
        );
        assert_eq!(
            corrector.correct_value(&serde_json::Value::Null, &options),
            Err(NameError::InvalidInput)
        );
    }

    #[test]
    fn test_response_serialization() {
        let corrector = NameCorrector::new();
        let response: CorrectionResponse = corrector
            .correct_name("Μαρία", &CorrectionOptions::default())
            .into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["greekScript"], "Μαρία");
        assert_eq!(json["latinTransliteration"], "Maria");
        assert_eq!(json["gender"], "feminine");
        assert_eq!(json["currentCase"], "nominative");
        assert_eq!(json["isGreekScript"], true);

        let rejected: CorrectionResponse = corrector
            .correct_name(" ", &CorrectionOptions::default())
            .into();
        let json = serde_json::to_value(&rejected).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Invalid name provided" }));
    }

    #[test]
    fn test_request_body() {
        let corrector = NameCorrector::new();
        let request: CorrectionRequest = serde_json::from_str(
            r#"{"name": "Μαρία", "options": {"targetCase": "genitive"}}"#,
        )
        .unwrap();
        let response = corrector.correct_request(&request);
        assert_eq!(response.corrected(), Some("Μαρίας"));

        let request: CorrectionRequest = serde_json::from_str(r#"{"options": {}}"#).unwrap();
        let response = corrector.correct_request(&request);
        assert_eq!(response.error(), Some("Invalid name provided"));
    }

    #[test]
    fn test_batch_continues_past_invalid_items() {
        let corrector = NameCorrector::new();
        let responses = corrector.correct_batch(["Νίκος", "", "Ελένη"], &CorrectionOptions::default());
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0].corrected(), Some("Νίκος"));
        assert!(responses[1].error().is_some());
        assert_eq!(responses[2].corrected(), Some("Ελένη"));
    }
}
