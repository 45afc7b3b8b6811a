//! Public correction facade
//!
//! [`NameCorrector`] runs the whole pipeline and returns a fresh
//! [`CorrectionResult`] per call. Invalid input comes back as
//! [`NameError::InvalidInput`], never as a panic.

#[allow(clippy::module_inception)]
mod corrector;
mod error;
mod normalizer;
mod options;
mod query;

pub use corrector::{CorrectionRequest, CorrectionResponse, CorrectionResult, NameCorrector};
pub use error::NameError;
pub use normalizer::apply_corrections;
pub use options::CorrectionOptions;
