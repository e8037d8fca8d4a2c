//! Respondent grouping vocabulary: stakeholder groups and 360° rater perspectives.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// University stakeholder group a respondent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StakeholderGroup {
    #[serde(alias = "ACADEMIC")]
    Academic,
    #[serde(alias = "ADMINISTRATIVE")]
    Administrative,
    #[serde(alias = "STUDENT")]
    Student,
    #[serde(alias = "EXTERNAL")]
    External,
    #[serde(alias = "ALUMNI")]
    Alumni,
}

impl StakeholderGroup {
    /// Returns the group code used as a cohort name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StakeholderGroup::Academic => "academic",
            StakeholderGroup::Administrative => "administrative",
            StakeholderGroup::Student => "student",
            StakeholderGroup::External => "external",
            StakeholderGroup::Alumni => "alumni",
        }
    }
}

impl fmt::Display for StakeholderGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StakeholderGroup {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "academic" => Ok(StakeholderGroup::Academic),
            "administrative" => Ok(StakeholderGroup::Administrative),
            "student" => Ok(StakeholderGroup::Student),
            "external" => Ok(StakeholderGroup::External),
            "alumni" => Ok(StakeholderGroup::Alumni),
            other => Err(ValidationError::invalid_format(
                "stakeholder_group",
                format!("unknown stakeholder group '{}'", other),
            )),
        }
    }
}

/// Relationship of a 360° rater to the manager being reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaterPerspective {
    /// The manager rating themself.
    #[serde(rename = "self", alias = "SELF")]
    SelfAssessment,
    #[serde(alias = "SUBORDINATE")]
    Subordinate,
    #[serde(alias = "PEER")]
    Peer,
    #[serde(alias = "SUPERIOR")]
    Superior,
}

impl RaterPerspective {
    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RaterPerspective::SelfAssessment => "self",
            RaterPerspective::Subordinate => "subordinate",
            RaterPerspective::Peer => "peer",
            RaterPerspective::Superior => "superior",
        }
    }

    /// Returns true for the manager's own rating.
    pub fn is_self(&self) -> bool {
        matches!(self, RaterPerspective::SelfAssessment)
    }
}

impl FromStr for RaterPerspective {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "self" => Ok(RaterPerspective::SelfAssessment),
            "subordinate" => Ok(RaterPerspective::Subordinate),
            "peer" => Ok(RaterPerspective::Peer),
            "superior" => Ok(RaterPerspective::Superior),
            other => Err(ValidationError::invalid_format(
                "rater_perspective",
                format!("unknown rater perspective '{}'", other),
            )),
        }
    }
}
