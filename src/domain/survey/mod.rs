//! Survey vocabulary: module catalog, package tiers, answers and responses.

mod answers;
mod catalog;
mod package_tier;

pub use answers::{
    Distribution, IpsativeAnswer, LikertAnswer, RecordedAnswer, ScoredLikertItem, SurveyResponse,
};
pub use catalog::{yokak_coverage, yokak_criterion_label, ModuleDefinition, QuestionFormat};
pub use package_tier::PackageTier;
