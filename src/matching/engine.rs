//! Retrieval orchestration for both matching directions
//!
//! Shortlists come from the vector index, oversampled so that
//! post-filtering by full score does not starve the final list. Each
//! shortlist entry is joined against the store and scored; entries
//! with missing or failing joins are skipped, never aborting the
//! ranked result.

use crate::capabilities::{EntityStore, VectorIndex};
use crate::config::Config;
use crate::domain::{CandidateId, JobId};
use crate::embedding::stored_similarity;
use crate::error::{Result, TalentMatcherError};
use crate::matching::screening::{
    experience_fit, match_explanation, screening_tier, skill_overlap,
};
use crate::scoring::{round2, CompatibilityScore, CompatibilityScorer, RecommendationTier};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One ranked job for a candidate, carrying the full report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_id: JobId,
    pub job_title: String,
    pub company: String,
    pub location: Option<String>,
    pub similarity_score: f32,
    pub overall_score: u8,
    pub compatibility: CompatibilityScore,
}

/// One ranked candidate for a job, carrying the screening breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub candidate_id: CandidateId,
    pub name: String,
    pub similarity_score: f32,
    pub skill_match_score: f32,
    pub experience_match_score: f32,
    pub overall_match_score: f32,
    pub match_percentage: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_explanation: String,
    pub recommendation: RecommendationTier,
}

/// Bidirectional matcher over two vector indexes and an entity store.
///
/// Stateless across invocations; construct once at process start and
/// share by reference. Retrieval and store calls run sequentially with
/// no internal fan-out, timeout, or retry.
pub struct MatchingEngine {
    job_index: Arc<dyn VectorIndex>,
    candidate_index: Arc<dyn VectorIndex>,
    store: Arc<dyn EntityStore>,
    scorer: CompatibilityScorer,
    config: Config,
}

impl MatchingEngine {
    pub fn new(
        job_index: Arc<dyn VectorIndex>,
        candidate_index: Arc<dyn VectorIndex>,
        store: Arc<dyn EntityStore>,
        scorer: CompatibilityScorer,
        config: Config,
    ) -> Self {
        Self {
            job_index,
            candidate_index,
            store,
            scorer,
            config,
        }
    }

    /// Rank the best-fitting jobs for a candidate.
    ///
    /// Results with an overall score below `min_score` (0-1 scale) are
    /// dropped before ranking; at most `limit` matches are returned,
    /// descending by overall score.
    pub async fn find_matching_jobs(
        &self,
        candidate_id: CandidateId,
        limit: usize,
        min_score: f32,
    ) -> Result<Vec<JobMatch>> {
        let profile = self
            .store
            .load_profile(candidate_id)
            .await
            .map_err(|e| TalentMatcherError::Store(e.to_string()))?
            .ok_or(TalentMatcherError::CandidateNotFound(candidate_id))?;

        let neighbors = self
            .job_index
            .nearest_neighbors(&profile.embedding, self.shortlist_size(limit))
            .await
            .map_err(|e| TalentMatcherError::Retrieval(e.to_string()))?;
        log::debug!(
            "Candidate {}: {} shortlisted jobs for limit {}",
            candidate_id,
            neighbors.len(),
            limit
        );

        let mut matches = Vec::new();
        for neighbor in neighbors {
            let job_id = JobId(neighbor.id);
            let similarity = 1.0 - neighbor.distance;

            let requirement = match self.store.load_requirement(job_id).await {
                Ok(Some(requirement)) => requirement,
                Ok(None) => {
                    log::warn!("Skipping shortlisted job {}: no stored requirement", job_id);
                    continue;
                }
                Err(e) => {
                    log::warn!("Skipping shortlisted job {}: {}", job_id, e);
                    continue;
                }
            };

            let compatibility = self.scorer.score(&profile, &requirement, similarity).await;
            if f32::from(compatibility.overall_score) < min_score * 100.0 {
                continue;
            }

            matches.push(JobMatch {
                job_id,
                job_title: requirement.title,
                company: requirement.company,
                location: requirement.location,
                similarity_score: round2(similarity),
                overall_score: compatibility.overall_score,
                compatibility,
            });
        }

        matches.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
        matches.truncate(limit);
        Ok(matches)
    }

    /// Rank the best-fitting candidates for a job using the simplified
    /// screening formula (see [`crate::matching::screening`]).
    pub async fn find_matching_candidates(
        &self,
        job_id: JobId,
        limit: usize,
        min_score: f32,
    ) -> Result<Vec<CandidateMatch>> {
        let requirement = self
            .store
            .load_requirement(job_id)
            .await
            .map_err(|e| TalentMatcherError::Store(e.to_string()))?
            .ok_or(TalentMatcherError::JobNotFound(job_id))?;

        let neighbors = self
            .candidate_index
            .nearest_neighbors(&requirement.embedding, self.shortlist_size(limit))
            .await
            .map_err(|e| TalentMatcherError::Retrieval(e.to_string()))?;
        log::debug!(
            "Job {}: {} shortlisted candidates for limit {}",
            job_id,
            neighbors.len(),
            limit
        );

        let weights = self.config.screening;
        let mut matches = Vec::new();
        for neighbor in neighbors {
            let candidate_id = CandidateId(neighbor.id);
            let similarity = 1.0 - neighbor.distance;

            let profile = match self.store.load_profile(candidate_id).await {
                Ok(Some(profile)) => profile,
                Ok(None) => {
                    log::warn!("Skipping shortlisted candidate {}: no stored profile", candidate_id);
                    continue;
                }
                Err(e) => {
                    log::warn!("Skipping shortlisted candidate {}: {}", candidate_id, e);
                    continue;
                }
            };

            let overlap = skill_overlap(&profile.skills, &requirement.required_skills);
            let candidate_years = profile.experience_years_or_zero();
            let fit = experience_fit(
                candidate_years,
                requirement.min_years_experience,
                requirement.max_years_experience,
            );
            let overall = similarity * weights.similarity
                + overlap.score * weights.skills
                + fit * weights.experience;

            if overall < min_score {
                continue;
            }

            let match_explanation = match_explanation(
                &overlap,
                fit,
                candidate_years,
                requirement.min_years_experience,
            );

            matches.push(CandidateMatch {
                candidate_id,
                name: profile.display_name().to_string(),
                similarity_score: round2(similarity),
                skill_match_score: round2(overlap.score),
                experience_match_score: round2(fit),
                overall_match_score: round2(overall),
                match_percentage: (overall * 100.0) as u8,
                matched_skills: overlap.matched,
                missing_skills: overlap.missing,
                match_explanation,
                recommendation: screening_tier(overall),
            });
        }

        matches.sort_by(|a, b| b.overall_match_score.total_cmp(&a.overall_match_score));
        matches.truncate(limit);
        Ok(matches)
    }

    /// Score one stored candidate against one stored job, deriving the
    /// semantic similarity from their stored embeddings.
    pub async fn score_pair(
        &self,
        candidate_id: CandidateId,
        job_id: JobId,
    ) -> Result<CompatibilityScore> {
        let profile = self
            .store
            .load_profile(candidate_id)
            .await
            .map_err(|e| TalentMatcherError::Store(e.to_string()))?
            .ok_or(TalentMatcherError::CandidateNotFound(candidate_id))?;
        let requirement = self
            .store
            .load_requirement(job_id)
            .await
            .map_err(|e| TalentMatcherError::Store(e.to_string()))?
            .ok_or(TalentMatcherError::JobNotFound(job_id))?;

        let similarity = stored_similarity(&profile.embedding, &requirement.embedding);
        Ok(self.scorer.score(&profile, &requirement, similarity).await)
    }

    /// Score one candidate against many jobs, strictly sequentially.
    ///
    /// A failure on one job is logged and skipped; the returned list
    /// holds the successful scores in input order and may be shorter
    /// than the input.
    pub async fn score_batch(
        &self,
        candidate_id: CandidateId,
        job_ids: &[JobId],
    ) -> Result<Vec<CompatibilityScore>> {
        let profile = self
            .store
            .load_profile(candidate_id)
            .await
            .map_err(|e| TalentMatcherError::Store(e.to_string()))?
            .ok_or(TalentMatcherError::CandidateNotFound(candidate_id))?;

        let mut results = Vec::with_capacity(job_ids.len());
        for &job_id in job_ids {
            let requirement = match self.store.load_requirement(job_id).await {
                Ok(Some(requirement)) => requirement,
                Ok(None) => {
                    log::warn!("Batch scoring skipped job {}: not found", job_id);
                    continue;
                }
                Err(e) => {
                    log::warn!("Batch scoring failed for job {}: {}", job_id, e);
                    continue;
                }
            };

            let similarity = stored_similarity(&profile.embedding, &requirement.embedding);
            results.push(self.scorer.score(&profile, &requirement, similarity).await);
        }

        Ok(results)
    }

    /// Neighbors to fetch for a requested limit; at least 2x to leave
    /// room for post-filtering.
    fn shortlist_size(&self, limit: usize) -> usize {
        limit.saturating_mul(self.config.retrieval.oversample_factor)
    }
}
