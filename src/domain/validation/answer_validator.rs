//! Answer validators.
//!
//! Every function here is total: malformed input produces a structured
//! outcome, never a panic or an `Err`. Call sites decide whether to reject
//! the submission or accept it with a warning.

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ModuleCode};
use crate::domain::survey::{IpsativeAnswer, LikertAnswer};

/// Points every ipsative question must distribute.
pub const IPSATIVE_SUM: f64 = 100.0;

/// Why a single answer was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnswerError {
    #[error("Distribution must total {expected}, got {sum}")]
    InvalidSum { expected: f64, sum: f64 },

    #[error("Distribution components cannot be negative")]
    NegativeValue,

    #[error("Value must be a whole number")]
    NonInteger,

    #[error("Value must be between {min} and {max}, got {value}")]
    OutOfRange { min: f64, max: f64, value: f64 },
}

impl AnswerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AnswerError::InvalidSum { .. } => ErrorCode::InvalidSum,
            AnswerError::NegativeValue => ErrorCode::NegativeValue,
            AnswerError::NonInteger => ErrorCode::NonInteger,
            AnswerError::OutOfRange { .. } => ErrorCode::OutOfRange,
        }
    }

    /// Message shown to the respondent in the survey UI (Turkish).
    pub fn localized(&self) -> String {
        match self {
            AnswerError::InvalidSum { expected, sum } => {
                format!("Toplam {} olmalı, şu an: {}", expected, sum)
            }
            AnswerError::NegativeValue => "Negatif değer olamaz".to_string(),
            AnswerError::NonInteger => "Tam sayı olmalı".to_string(),
            AnswerError::OutOfRange { min, max, .. } => {
                format!("Değer {}-{} arasında olmalı", min, max)
            }
        }
    }
}

/// Serializable form of an [`AnswerError`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerIssue {
    pub code: String,
    pub message: String,
}

impl From<&AnswerError> for AnswerIssue {
    fn from(err: &AnswerError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.localized(),
        }
    }
}

/// Result of validating one answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub error: Option<AnswerError>,
}

impl ValidationOutcome {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn fail(error: AnswerError) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }

    pub fn into_result(self) -> Result<(), AnswerError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Checks an ipsative distribution: sum, then sign, then integrality.
pub fn validate_ipsative_answer(answer: &IpsativeAnswer) -> ValidationOutcome {
    let components = answer.distribution.components();
    let sum = answer.distribution.sum();

    if sum != IPSATIVE_SUM {
        return ValidationOutcome::fail(AnswerError::InvalidSum {
            expected: IPSATIVE_SUM,
            sum,
        });
    }
    if components.iter().any(|v| *v < 0.0) {
        return ValidationOutcome::fail(AnswerError::NegativeValue);
    }
    if !components.iter().copied().all(is_whole) {
        return ValidationOutcome::fail(AnswerError::NonInteger);
    }
    ValidationOutcome::ok()
}

/// Checks a Likert value against an inclusive scale.
pub fn validate_likert_answer(answer: &LikertAnswer, scale_min: u8, scale_max: u8) -> ValidationOutcome {
    let (min, max) = (f64::from(scale_min), f64::from(scale_max));
    // NaN fails both comparisons, so test containment rather than exclusion.
    if !(min..=max).contains(&answer.value) {
        return ValidationOutcome::fail(AnswerError::OutOfRange {
            min,
            max,
            value: answer.value,
        });
    }
    if !is_whole(answer.value) {
        return ValidationOutcome::fail(AnswerError::NonInteger);
    }
    ValidationOutcome::ok()
}

/// Returns the requested modules that `allowed` does not contain.
///
/// A non-empty result means the tenant's package does not cover the request.
pub fn validate_module_set(requested: &[ModuleCode], allowed: &[ModuleCode]) -> Vec<ModuleCode> {
    requested
        .iter()
        .copied()
        .filter(|m| !allowed.contains(m))
        .collect()
}

/// Returns the required CSV headers missing from `headers`.
///
/// Matching is case-insensitive. Whitespace around the uploaded headers is
/// ignored; required names are compared as given.
pub fn validate_csv_headers<S: AsRef<str>>(headers: &[S], required: &[&str]) -> Vec<String> {
    let present: Vec<String> = headers
        .iter()
        .map(|h| h.as_ref().trim().to_lowercase())
        .collect();

    required
        .iter()
        .filter(|r| !present.contains(&r.to_lowercase()))
        .map(|r| r.to_string())
        .collect()
}
