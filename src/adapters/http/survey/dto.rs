//! HTTP DTOs for survey endpoints.

use serde::Deserialize;

use crate::application::handlers::survey::SubmittedAnswer;
use crate::domain::foundation::{DomainError, ModuleCode};
use crate::domain::survey::{Distribution, IpsativeAnswer, LikertAnswer};

/// Body of `POST /api/survey/validate`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateSubmissionRequest {
    /// Modules the submission covers. Modules referenced only by answers
    /// are checked too.
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub answers: Vec<SubmittedAnswerDto>,
}

/// One answer as sent by the survey client.
///
/// Exactly one of `distribution` (ipsative) or `value` (Likert) is set.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswerDto {
    pub module: String,
    pub question_id: String,
    pub distribution: Option<Distribution>,
    pub value: Option<f64>,
}

impl ValidateSubmissionRequest {
    pub fn modules(&self) -> Result<Vec<ModuleCode>, DomainError> {
        self.modules
            .iter()
            .map(|m| m.parse::<ModuleCode>().map_err(DomainError::from))
            .collect()
    }
}

impl TryFrom<SubmittedAnswerDto> for SubmittedAnswer {
    type Error = DomainError;

    fn try_from(dto: SubmittedAnswerDto) -> Result<Self, Self::Error> {
        let module: ModuleCode = dto.module.parse()?;
        match (dto.distribution, dto.value) {
            (Some(distribution), None) => Ok(SubmittedAnswer::Ipsative {
                module,
                answer: IpsativeAnswer {
                    question_id: dto.question_id,
                    distribution,
                },
            }),
            (None, Some(value)) => Ok(SubmittedAnswer::Likert {
                module,
                answer: LikertAnswer {
                    question_id: dto.question_id,
                    value,
                },
            }),
            _ => Err(DomainError::validation(
                "answers",
                format!(
                    "Answer {} must carry exactly one of distribution or value",
                    dto.question_id
                ),
            )
            .with_detail("questionId", dto.question_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use serde_json::json;

    #[test]
    fn deserializes_mixed_answers() {
        let request: ValidateSubmissionRequest = serde_json::from_value(json!({
            "modules": ["M1_OCAI", "m2_qci"],
            "answers": [
                {"module": "M1_OCAI", "questionId": "ocai_1_current",
                 "distribution": {"A": 40, "B": 30, "C": 20, "D": 10}},
                {"module": "M2_QCI", "questionId": "qci_1", "value": 4}
            ]
        }))
        .unwrap();

        assert_eq!(
            request.modules().unwrap(),
            vec![ModuleCode::M1Ocai, ModuleCode::M2Qci]
        );

        let answers: Vec<SubmittedAnswer> = request
            .answers
            .into_iter()
            .map(SubmittedAnswer::try_from)
            .collect::<Result<_, _>>()
            .unwrap();
        assert!(matches!(answers[0], SubmittedAnswer::Ipsative { .. }));
        assert!(matches!(answers[1], SubmittedAnswer::Likert { .. }));
        assert_eq!(answers[1].question_id(), "qci_1");
    }

    #[test]
    fn rejects_unknown_module() {
        let request = ValidateSubmissionRequest {
            modules: vec!["M9".to_string()],
            answers: vec![],
        };
        let err = request.modules().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn rejects_answer_with_both_shapes() {
        let dto = SubmittedAnswerDto {
            module: "M2_QCI".to_string(),
            question_id: "qci_1".to_string(),
            distribution: Some(Distribution::default()),
            value: Some(3.0),
        };
        let err = SubmittedAnswer::try_from(dto).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("questionId"), Some(&"qci_1".to_string()));
    }

    #[test]
    fn rejects_answer_with_neither_shape() {
        let dto = SubmittedAnswerDto {
            module: "M2_QCI".to_string(),
            question_id: "qci_2".to_string(),
            distribution: None,
            value: None,
        };
        assert!(SubmittedAnswer::try_from(dto).is_err());
    }
}
