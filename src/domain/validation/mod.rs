//! Validation Module - Answer shape and range checks run before scoring.

mod answer_validator;

pub use answer_validator::{
    validate_csv_headers, validate_ipsative_answer, validate_likert_answer, validate_module_set,
    AnswerError, AnswerIssue, ValidationOutcome, IPSATIVE_SUM,
};
