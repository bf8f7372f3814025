//! Bidirectional matching: retrieval orchestration and ranking

pub mod engine;
pub mod screening;

pub use engine::{CandidateMatch, JobMatch, MatchingEngine};
pub use screening::{experience_fit, match_explanation, screening_tier, skill_overlap, SkillOverlap};
