//! ValidateSubmissionHandler - Checks a survey submission before it is stored.
//!
//! Two layers of checks run in order:
//! 1. Module authorization against the organization's package tier
//! 2. Shape and range checks for every answer, using the module's format

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::foundation::{ErrorCode, ModuleCode, OrganizationId};
use crate::domain::survey::{IpsativeAnswer, LikertAnswer, PackageTier};
use crate::domain::validation::{
    validate_ipsative_answer, validate_likert_answer, validate_module_set, AnswerIssue,
};
use crate::ports::{AnalyticsError, TenantReader};

/// A single submitted answer tagged with its module.
#[derive(Debug, Clone)]
pub enum SubmittedAnswer {
    Ipsative {
        module: ModuleCode,
        answer: IpsativeAnswer,
    },
    Likert {
        module: ModuleCode,
        answer: LikertAnswer,
    },
}

impl SubmittedAnswer {
    pub fn module(&self) -> ModuleCode {
        match self {
            SubmittedAnswer::Ipsative { module, .. } | SubmittedAnswer::Likert { module, .. } => {
                *module
            }
        }
    }

    pub fn question_id(&self) -> &str {
        match self {
            SubmittedAnswer::Ipsative { answer, .. } => &answer.question_id,
            SubmittedAnswer::Likert { answer, .. } => &answer.question_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidateSubmissionCommand {
    pub organization_id: OrganizationId,
    /// Modules the submission claims to cover.
    pub modules: Vec<ModuleCode>,
    pub answers: Vec<SubmittedAnswer>,
}

/// A problem found with one answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionIssue {
    pub question_id: String,
    pub module: ModuleCode,
    #[serde(flatten)]
    pub issue: AnswerIssue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateSubmissionResult {
    pub valid: bool,
    pub package_tier: PackageTier,
    pub checked_answers: usize,
    pub issues: Vec<SubmissionIssue>,
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("modules not included in package: {}", format_modules(.0))]
    UnauthorizedModules(Vec<ModuleCode>),

    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
}

fn format_modules(modules: &[ModuleCode]) -> String {
    modules
        .iter()
        .map(ModuleCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct ValidateSubmissionHandler {
    tenants: Arc<dyn TenantReader>,
}

impl ValidateSubmissionHandler {
    pub fn new(tenants: Arc<dyn TenantReader>) -> Self {
        Self { tenants }
    }

    pub async fn handle(
        &self,
        cmd: ValidateSubmissionCommand,
    ) -> Result<ValidateSubmissionResult, SubmissionError> {
        let tier = self.tenants.package_tier(cmd.organization_id).await?;

        let mut requested: Vec<ModuleCode> = Vec::new();
        for module in cmd.modules.iter().copied().chain(cmd.answers.iter().map(SubmittedAnswer::module)) {
            if !requested.contains(&module) {
                requested.push(module);
            }
        }

        let unauthorized = validate_module_set(&requested, tier.allowed_modules());
        if !unauthorized.is_empty() {
            info!(
                organization_id = %cmd.organization_id,
                tier = %tier,
                modules = %format_modules(&unauthorized),
                "Submission uses modules outside package"
            );
            return Err(SubmissionError::UnauthorizedModules(unauthorized));
        }

        let issues: Vec<SubmissionIssue> = cmd
            .answers
            .iter()
            .filter_map(|answer| {
                check_answer(answer).map(|issue| SubmissionIssue {
                    question_id: answer.question_id().to_string(),
                    module: answer.module(),
                    issue,
                })
            })
            .collect();

        debug!(
            organization_id = %cmd.organization_id,
            answers = cmd.answers.len(),
            issues = issues.len(),
            "Validated submission"
        );

        Ok(ValidateSubmissionResult {
            valid: issues.is_empty(),
            package_tier: tier,
            checked_answers: cmd.answers.len(),
            issues,
        })
    }
}

/// Checks one answer against its module's question format.
fn check_answer(answer: &SubmittedAnswer) -> Option<AnswerIssue> {
    let format = answer.module().format();
    match (answer, format.scale_bounds()) {
        (SubmittedAnswer::Ipsative { answer, .. }, None) => validate_ipsative_answer(answer)
            .error
            .as_ref()
            .map(AnswerIssue::from),
        (SubmittedAnswer::Likert { answer, .. }, Some((min, max))) => {
            validate_likert_answer(answer, min, max)
                .error
                .as_ref()
                .map(AnswerIssue::from)
        }
        (_, _) => Some(AnswerIssue {
            code: ErrorCode::InvalidFormat.as_str().to_string(),
            message: format!(
                "{} soruları bu yanıt biçimini kabul etmiyor",
                answer.module()
            ),
        }),
    }
}
