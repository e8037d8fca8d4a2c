//! Answer value objects and the response read model consumed by analytics.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CulturePerspective, CultureType, ModuleCode, ParticipantId, RaterPerspective, ResponseId,
    StakeholderGroup,
};

/// Points an ipsative question splits across its four alternatives.
///
/// Components are `f64` so fractional input reaches the validators instead
/// of failing deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "B")]
    pub b: f64,
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "D")]
    pub d: f64,
}

impl Distribution {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Components in A-D order.
    pub fn components(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn sum(&self) -> f64 {
        self.components().iter().sum()
    }

    /// Points given to the alternative mapped to `culture_type`.
    pub fn points_for(&self, culture_type: CultureType) -> f64 {
        match culture_type {
            CultureType::Clan => self.a,
            CultureType::Adhocracy => self.b,
            CultureType::Market => self.c,
            CultureType::Hierarchy => self.d,
        }
    }
}

/// A submitted answer to an ipsative question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpsativeAnswer {
    pub question_id: String,
    pub distribution: Distribution,
}

/// A submitted answer to a Likert question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikertAnswer {
    pub question_id: String,
    pub value: f64,
}

/// A Likert answer joined with the question metadata needed for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredLikertItem {
    pub dimension: String,
    pub value: f64,
    #[serde(default)]
    pub reverse_scored: bool,
    pub scale_max: u8,
}

impl ScoredLikertItem {
    pub fn new(dimension: impl Into<String>, value: f64, reverse_scored: bool, scale_max: u8) -> Self {
        Self {
            dimension: dimension.into(),
            value,
            reverse_scored,
            scale_max,
        }
    }

    /// The value after reverse scoring, `scale_max + 1 - value` when flagged.
    pub fn scored_value(&self) -> f64 {
        reverse_score(self.value, self.reverse_scored, self.scale_max)
    }
}

fn reverse_score(value: f64, reverse_scored: bool, scale_max: u8) -> f64 {
    if reverse_scored {
        f64::from(scale_max) + 1.0 - value
    } else {
        value
    }
}

/// A persisted answer as read back for analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "camelCase")]
pub enum RecordedAnswer {
    #[serde(rename_all = "camelCase")]
    Ipsative {
        module: ModuleCode,
        dimension: String,
        perspective: CulturePerspective,
        distribution: Distribution,
    },
    #[serde(rename_all = "camelCase")]
    Likert {
        module: ModuleCode,
        dimension: String,
        value: f64,
        #[serde(default)]
        reverse_scored: bool,
        scale_max: u8,
    },
}

impl RecordedAnswer {
    pub fn module(&self) -> ModuleCode {
        match self {
            RecordedAnswer::Ipsative { module, .. } | RecordedAnswer::Likert { module, .. } => *module,
        }
    }

    pub fn dimension(&self) -> &str {
        match self {
            RecordedAnswer::Ipsative { dimension, .. } | RecordedAnswer::Likert { dimension, .. } => {
                dimension
            }
        }
    }

    /// True when the answer belongs to `module`, or always when no filter is set.
    pub fn matches_module(&self, module: Option<ModuleCode>) -> bool {
        module.map_or(true, |m| self.module() == m)
    }

    /// Reverse-scored Likert value; `None` for ipsative answers.
    pub fn likert_value(&self) -> Option<f64> {
        match self {
            RecordedAnswer::Likert {
                value,
                reverse_scored,
                scale_max,
                ..
            } => Some(reverse_score(*value, *reverse_scored, *scale_max)),
            RecordedAnswer::Ipsative { .. } => None,
        }
    }
}

/// One participant's completed survey, as the storage layer hands it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub response_id: ResponseId,
    pub participant_id: ParticipantId,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub stakeholder_group: Option<StakeholderGroup>,
    #[serde(default)]
    pub rater_perspective: Option<RaterPerspective>,
    #[serde(default)]
    pub answers: Vec<RecordedAnswer>,
}

impl SurveyResponse {
    /// Answers belonging to `module`, or all answers when `None`.
    pub fn answers_for(&self, module: Option<ModuleCode>) -> impl Iterator<Item = &RecordedAnswer> {
        self.answers.iter().filter(move |a| a.matches_module(module))
    }

    /// True if the response has at least one answer for `module`.
    pub fn participates_in(&self, module: Option<ModuleCode>) -> bool {
        self.answers_for(module).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_uses_letter_keys_on_the_wire() {
        let d: Distribution = serde_json::from_str(r#"{"A":40,"B":20,"C":20,"D":20}"#).unwrap();
        assert_eq!(d, Distribution::new(40.0, 20.0, 20.0, 20.0));
        assert_eq!(d.sum(), 100.0);
    }

    #[test]
    fn distribution_points_follow_alternative_mapping() {
        let d = Distribution::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(d.points_for(CultureType::Clan), 10.0);
        assert_eq!(d.points_for(CultureType::Hierarchy), 40.0);
    }

    #[test]
    fn reverse_scored_item_inverts_on_scale() {
        let item = ScoredLikertItem::new("Güven", 2.0, true, 5);
        assert_eq!(item.scored_value(), 4.0);

        let item = ScoredLikertItem::new("Güven", 2.0, false, 5);
        assert_eq!(item.scored_value(), 2.0);
    }

    #[test]
    fn scored_item_defaults_reverse_flag() {
        let item: ScoredLikertItem =
            serde_json::from_str(r#"{"dimension":"Dinçlik","value":6,"scaleMax":7}"#).unwrap();
        assert!(!item.reverse_scored);
    }

    #[test]
    fn recorded_answer_is_tagged_by_format() {
        let json = r#"{"format":"likert","module":"M2_QCI","dimension":"Liderlik","value":3,"reverseScored":true,"scaleMax":5}"#;
        let answer: RecordedAnswer = serde_json::from_str(json).unwrap();
        assert_eq!(answer.module(), ModuleCode::M2Qci);
        assert_eq!(answer.dimension(), "Liderlik");
        assert_eq!(answer.likert_value(), Some(3.0));
    }

    #[test]
    fn ipsative_answer_has_no_likert_value() {
        let answer = RecordedAnswer::Ipsative {
            module: ModuleCode::M1Ocai,
            dimension: "Baskın Özellikler".to_string(),
            perspective: CulturePerspective::Current,
            distribution: Distribution::new(25.0, 25.0, 25.0, 25.0),
        };
        assert_eq!(answer.likert_value(), None);
    }

    #[test]
    fn module_filter_selects_answers() {
        let response = SurveyResponse {
            response_id: ResponseId::new(),
            participant_id: ParticipantId::new("p1").unwrap(),
            department: None,
            stakeholder_group: None,
            rater_perspective: None,
            answers: vec![
                RecordedAnswer::Likert {
                    module: ModuleCode::M2Qci,
                    dimension: "Güven".to_string(),
                    value: 4.0,
                    reverse_scored: false,
                    scale_max: 5,
                },
                RecordedAnswer::Likert {
                    module: ModuleCode::M4Uwes,
                    dimension: "Dinçlik".to_string(),
                    value: 6.0,
                    reverse_scored: false,
                    scale_max: 7,
                },
            ],
        };

        assert_eq!(response.answers_for(None).count(), 2);
        assert_eq!(response.answers_for(Some(ModuleCode::M4Uwes)).count(), 1);
        assert!(!response.participates_in(Some(ModuleCode::M5Pke)));
    }
}
