//! HTTP DTOs for analytics endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    CampaignCultureReport, CohortComparison, CohortSummary, CultureProfile, DimensionScore,
    GapDirection, GapResult, GapSeverity, GapSeverityBands,
};
use crate::domain::foundation::{CultureType, ModuleCode};
use crate::domain::survey::{Distribution, ScoredLikertItem};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/analytics/culture-profile`.
#[derive(Debug, Clone, Deserialize)]
pub struct CultureProfileRequest {
    pub distributions: Vec<Distribution>,
}

/// Body of `POST /api/analytics/likert-scores`.
#[derive(Debug, Clone, Deserialize)]
pub struct LikertScoresRequest {
    pub answers: Vec<ScoredLikertItem>,
}

/// Body of `POST /api/analytics/gap`.
#[derive(Debug, Clone, Deserialize)]
pub struct GapRequest {
    pub current: CultureProfile,
    pub preferred: CultureProfile,
}

/// `?module=` filter for cohort comparisons.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleFilterParams {
    pub module: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureProfileResponse {
    pub profile: CultureProfile,
    pub dominant: CultureType,
    pub distribution_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LikertScoresResponse {
    pub dimensions: BTreeMap<String, DimensionScore>,
}

/// One gap with its direction and, when bands are configured, severity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapView {
    #[serde(flatten)]
    pub gap: GapResult,
    pub direction: GapDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<GapSeverity>,
}

impl GapView {
    pub fn from_results(gaps: Vec<GapResult>, bands: Option<&GapSeverityBands>) -> Vec<Self> {
        gaps.into_iter()
            .map(|gap| GapView {
                direction: gap.direction(),
                severity: bands.map(|b| b.classify(gap.abs_gap)),
                gap,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GapResponse {
    pub gaps: Vec<GapView>,
}

/// Department comparison as served to the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentComparisonResponse {
    pub departments: Vec<CohortSummary>,
    pub excluded_departments: usize,
    pub total_participants: usize,
    pub min_group_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleCode>,
}

impl DepartmentComparisonResponse {
    pub fn new(comparison: CohortComparison, module: Option<ModuleCode>) -> Self {
        Self {
            departments: comparison.cohorts,
            excluded_departments: comparison.excluded_cohorts,
            total_participants: comparison.total_participants,
            min_group_size: comparison.min_group_size,
            module,
        }
    }
}

/// Stakeholder group comparison as served to the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderComparisonResponse {
    pub groups: Vec<CohortSummary>,
    pub excluded_groups: usize,
    pub total_participants: usize,
    pub min_group_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleCode>,
}

impl StakeholderComparisonResponse {
    pub fn new(comparison: CohortComparison, module: Option<ModuleCode>) -> Self {
        Self {
            groups: comparison.cohorts,
            excluded_groups: comparison.excluded_cohorts,
            total_participants: comparison.total_participants,
            min_group_size: comparison.min_group_size,
            module,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignCultureResponse {
    pub respondent_count: usize,
    pub current: CultureProfile,
    pub preferred: CultureProfile,
    pub dominant_current: CultureType,
    pub dominant_preferred: CultureType,
    pub gaps: Vec<GapView>,
    pub dimension_detail: BTreeMap<String, CultureProfile>,
}

impl CampaignCultureResponse {
    pub fn new(report: CampaignCultureReport, bands: Option<&GapSeverityBands>) -> Self {
        Self {
            respondent_count: report.respondent_count,
            current: report.current,
            preferred: report.preferred,
            dominant_current: report.dominant_current,
            dominant_preferred: report.dominant_preferred,
            gaps: GapView::from_results(report.gaps, bands),
            dimension_detail: report.dimension_detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::GapAnalyzer;

    fn sample_gaps() -> Vec<GapResult> {
        GapAnalyzer::calculate_gap(
            &CultureProfile::new(30.0, 25.0, 25.0, 20.0),
            &CultureProfile::new(45.0, 25.0, 15.0, 15.0),
        )
    }

    #[test]
    fn gap_view_omits_severity_without_bands() {
        let views = GapView::from_results(sample_gaps(), None);
        let json = serde_json::to_value(&views[0]).unwrap();
        assert_eq!(json["type"], "clan");
        assert_eq!(json["direction"], "increase");
        assert!(json.get("severity").is_none());
    }

    #[test]
    fn gap_view_classifies_with_bands() {
        let bands = GapSeverityBands::new(5.0, 10.0).unwrap();
        let views = GapView::from_results(sample_gaps(), Some(&bands));
        let json = serde_json::to_value(&views).unwrap();
        assert_eq!(json[0]["severity"], "high");
        assert_eq!(json[2]["severity"], "medium");
        assert_eq!(json[3]["severity"], "low");
    }

    #[test]
    fn department_response_uses_department_field_names() {
        let comparison = CohortComparison {
            cohorts: vec![],
            excluded_cohorts: 2,
            total_participants: 8,
            min_group_size: 5,
        };
        let json = serde_json::to_value(DepartmentComparisonResponse::new(comparison, None)).unwrap();
        assert_eq!(json["excludedDepartments"], 2);
        assert_eq!(json["totalParticipants"], 8);
        assert!(json["departments"].as_array().unwrap().is_empty());
        assert!(json.get("excludedCohorts").is_none());
    }

    #[test]
    fn stakeholder_response_uses_group_field_names() {
        let comparison = CohortComparison {
            cohorts: vec![],
            excluded_cohorts: 1,
            total_participants: 3,
            min_group_size: 5,
        };
        let json = serde_json::to_value(StakeholderComparisonResponse::new(
            comparison,
            Some(ModuleCode::M5Pke),
        ))
        .unwrap();
        assert_eq!(json["excludedGroups"], 1);
        assert_eq!(json["module"], "M5_PKE");
    }

    #[test]
    fn culture_profile_request_reads_letter_keys() {
        let req: CultureProfileRequest =
            serde_json::from_str(r#"{"distributions":[{"A":40,"B":20,"C":20,"D":20}]}"#).unwrap();
        assert_eq!(req.distributions.len(), 1);
    }
}
