//! Survey command handlers.

mod validate_submission;

pub use validate_submission::{
    SubmissionError, SubmissionIssue, SubmittedAnswer, ValidateSubmissionCommand,
    ValidateSubmissionHandler, ValidateSubmissionResult,
};
