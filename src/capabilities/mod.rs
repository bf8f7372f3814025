//! Injected collaborator interfaces
//!
//! The engine consumes four capabilities it does not implement: vector
//! nearest-neighbor lookup, entity loading, critical-skill
//! classification, and work-history relevance judgment. All four are
//! trait objects supplied at construction; the scoring core itself
//! performs no network or storage I/O.
//!
//! The two judgment capabilities are allowed to fail: the engine
//! recovers with documented deterministic fallbacks and never surfaces
//! their errors. Neither timeout nor retry policy lives here; callers
//! compose those around their implementations.

use crate::domain::{CandidateId, CandidateProfile, JobId, JobRequirement, WorkHistoryEntry};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One nearest-neighbor hit from a vector index, in the index's raw
/// id space. Ascending distance means descending similarity;
/// similarity = 1 - distance in this system's convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub id: i64,
    pub distance: f32,
}

/// Vector index lookup over precomputed embeddings.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Return up to `k` neighbors ordered by ascending distance.
    async fn nearest_neighbors(&self, query: &[f32], k: usize) -> anyhow::Result<Vec<Neighbor>>;
}

/// Loads full candidate and job records for shortlist entries.
/// `None` means the id does not resolve to a stored record.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn load_profile(&self, id: CandidateId) -> anyhow::Result<Option<CandidateProfile>>;

    async fn load_requirement(&self, id: JobId) -> anyhow::Result<Option<JobRequirement>>;
}

/// Classifies which required skills are must-haves for a posting.
///
/// Typically backed by an LLM. Fails open: on any error the caller
/// falls back to the first three required skills in list order.
#[async_trait]
pub trait CriticalSkillClassifier: Send + Sync {
    async fn classify(
        &self,
        job_description: &str,
        required_skills: &[String],
    ) -> anyhow::Result<Vec<String>>;
}

/// The slice of a job posting handed to the work-history judge.
/// The description is pre-truncated by the assessor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobContext {
    pub title: String,
    pub company: String,
    pub description: String,
}

/// Structured verdict expected back from the work-history judge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkHistoryVerdict {
    /// Relevance on a 0-100 scale; values above 100 are clamped.
    pub score: u8,
    pub relevant_count: usize,
    pub recent_relevant: bool,
    pub progression: String,
}

/// Judges how relevant a candidate's recent positions are to a job.
///
/// Typically backed by an LLM. Fails open: on any error the caller
/// falls back to a fixed neutral-positive assessment.
#[async_trait]
pub trait WorkHistoryJudge: Send + Sync {
    async fn assess(
        &self,
        job: &JobContext,
        work_history: &[WorkHistoryEntry],
    ) -> anyhow::Result<WorkHistoryVerdict>;
}
