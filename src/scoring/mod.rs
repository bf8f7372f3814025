//! Compatibility scoring components
//!
//! Leaves first: the four individual matchers and the similarity
//! interpreter are pure functions; the aggregator combines them into
//! one explainable report.

pub mod education;
pub mod experience;
pub mod scorer;
pub mod semantic;
pub mod skills;
pub mod work_history;

pub use education::{match_education, EducationMatch};
pub use experience::{match_experience, ExperienceAssessment, ExperienceMatch};
pub use scorer::{
    Audience, CompatibilityScore, CompatibilityScorer, Priority, Recommendation,
    RecommendationTier,
};
pub use semantic::SemanticSimilarity;
pub use skills::{match_skills, SkillMatch};
pub use work_history::{assess_work_history, WorkExperienceRelevance};

/// Round to two decimals for reported sub-scores and rates.
pub(crate) fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
