//! PostgreSQL implementation of ResponseReader.
//!
//! Answers are stored one row per question in `survey_answers` with the
//! payload in a JSONB `answer_json` column. The payload shape depends on
//! the module format:
//!
//! - ipsative: `{"dimension", "perspective", "values": {"A","B","C","D"}}`
//! - Likert: `{"subdimension", "value", "reverseScored"?, "scaleMax"?}`

use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::foundation::{
    CampaignId, CulturePerspective, ModuleCode, ParticipantId, RaterPerspective, ResponseId,
    StakeholderGroup,
};
use crate::domain::survey::{Distribution, RecordedAnswer, SurveyResponse};
use crate::ports::{AnalyticsError, ResponseReader};

/// PostgreSQL implementation of the ResponseReader port.
#[derive(Clone)]
pub struct PostgresResponseReader {
    pool: PgPool,
}

impl PostgresResponseReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ensure_campaign_exists(&self, campaign_id: CampaignId) -> Result<(), AnalyticsError> {
        let exists: Option<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT id FROM survey_campaigns WHERE id = $1
            "#,
        )
        .bind(campaign_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        exists
            .map(|_| ())
            .ok_or(AnalyticsError::CampaignNotFound(campaign_id))
    }
}

/// One answer joined with its response metadata.
#[derive(Debug, sqlx::FromRow)]
struct AnswerRow {
    response_id: Uuid,
    participant_id: String,
    department: Option<String>,
    stakeholder_group: Option<String>,
    rater_perspective: Option<String>,
    module_code: String,
    answer_json: JsonValue,
}

#[derive(Debug, Deserialize)]
struct IpsativePayload {
    dimension: String,
    perspective: CulturePerspective,
    values: Distribution,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LikertPayload {
    #[serde(alias = "dimension")]
    subdimension: String,
    value: f64,
    #[serde(default)]
    reverse_scored: bool,
    scale_max: Option<u8>,
}

fn decode_answer(module: ModuleCode, payload: JsonValue) -> Result<RecordedAnswer, serde_json::Error> {
    match module.format().scale_bounds() {
        None => {
            let p: IpsativePayload = serde_json::from_value(payload)?;
            Ok(RecordedAnswer::Ipsative {
                module,
                dimension: p.dimension,
                perspective: p.perspective,
                distribution: p.values,
            })
        }
        Some((_, default_max)) => {
            let p: LikertPayload = serde_json::from_value(payload)?;
            Ok(RecordedAnswer::Likert {
                module,
                dimension: p.subdimension,
                value: p.value,
                reverse_scored: p.reverse_scored,
                scale_max: p.scale_max.unwrap_or(default_max),
            })
        }
    }
}

/// Parses an optional enum column, treating unknown values as absent.
fn parse_optional<T: FromStr>(column: &str, raw: Option<&str>) -> Option<T> {
    let raw = raw?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(column, value = raw, "Ignoring unrecognised column value");
            None
        }
    }
}

/// Folds joined rows into responses, keeping first-seen response order.
fn assemble_responses(rows: Vec<AnswerRow>) -> Vec<SurveyResponse> {
    let mut responses: Vec<SurveyResponse> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for row in rows {
        let Ok(module) = ModuleCode::from_str(&row.module_code) else {
            warn!(response_id = %row.response_id, module = %row.module_code, "Skipping answer with unknown module");
            continue;
        };
        let answer = match decode_answer(module, row.answer_json) {
            Ok(answer) => answer,
            Err(e) => {
                warn!(response_id = %row.response_id, error = %e, "Skipping malformed answer payload");
                continue;
            }
        };

        let slot = match index.get(&row.response_id) {
            Some(&slot) => slot,
            None => {
                let Ok(participant_id) = ParticipantId::new(row.participant_id) else {
                    warn!(response_id = %row.response_id, "Skipping response without participant id");
                    continue;
                };
                responses.push(SurveyResponse {
                    response_id: ResponseId::from_uuid(row.response_id),
                    participant_id,
                    department: row.department,
                    stakeholder_group: parse_optional::<StakeholderGroup>(
                        "stakeholder_group",
                        row.stakeholder_group.as_deref(),
                    ),
                    rater_perspective: parse_optional::<RaterPerspective>(
                        "rater_perspective",
                        row.rater_perspective.as_deref(),
                    ),
                    answers: Vec::new(),
                });
                index.insert(row.response_id, responses.len() - 1);
                responses.len() - 1
            }
        };
        responses[slot].answers.push(answer);
    }

    responses
}

#[async_trait]
impl ResponseReader for PostgresResponseReader {
    async fn fetch_responses(
        &self,
        campaign_id: CampaignId,
        module: Option<ModuleCode>,
    ) -> Result<Vec<SurveyResponse>, AnalyticsError> {
        self.ensure_campaign_exists(campaign_id).await?;

        let rows: Vec<AnswerRow> = sqlx::query_as(
            r#"
            SELECT r.id AS response_id,
                   r.anonymous_participant_id AS participant_id,
                   r.department,
                   r.stakeholder_group,
                   r.rater_perspective,
                   a.module_code,
                   a.answer_json
            FROM survey_responses r
            JOIN survey_answers a ON a.response_id = r.id
            WHERE r.campaign_id = $1
              AND r.status = 'COMPLETED'
              AND ($2::text IS NULL OR a.module_code = $2)
            ORDER BY r.completed_at, r.id, a.question_id
            "#,
        )
        .bind(campaign_id.as_uuid())
        .bind(module.map(|m| m.as_str()))
        .fetch_all(&self.pool)
        .await?;

        let responses = assemble_responses(rows);
        debug!(
            campaign_id = %campaign_id,
            module = ?module,
            responses = responses.len(),
            "Loaded survey responses"
        );
        Ok(responses)
    }
}
