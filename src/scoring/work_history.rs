//! Work-history relevance via the injected judge

use crate::capabilities::{JobContext, WorkHistoryJudge};
use crate::domain::{JobRequirement, WorkHistoryEntry};
use serde::{Deserialize, Serialize};

/// Job description characters handed to the judge.
const DESCRIPTION_CONTEXT_CHARS: usize = 300;
/// Most recent positions handed to the judge.
const JUDGED_POSITIONS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperienceRelevance {
    pub score: f32,
    pub relevant_positions: usize,
    pub total_positions: usize,
    pub recent_experience_relevant: bool,
    pub career_progression: String,
}

/// Assess how relevant the candidate's recent positions are to a job.
///
/// Semantic judgment is delegated to the injected judge; this function
/// only frames the question and normalizes the verdict. Any judge
/// failure degrades to a fixed neutral-positive assessment and is
/// never surfaced to the caller.
pub async fn assess_work_history(
    judge: &dyn WorkHistoryJudge,
    job: &JobRequirement,
    work_history: &[WorkHistoryEntry],
) -> WorkExperienceRelevance {
    if work_history.is_empty() {
        return WorkExperienceRelevance {
            score: 0.5,
            relevant_positions: 0,
            total_positions: 0,
            recent_experience_relevant: false,
            career_progression: "Unclear".to_string(),
        };
    }

    let context = JobContext {
        title: job.title.clone(),
        company: job.company.clone(),
        description: truncate_chars(&job.description, DESCRIPTION_CONTEXT_CHARS),
    };
    let recent = &work_history[..work_history.len().min(JUDGED_POSITIONS)];

    match judge.assess(&context, recent).await {
        Ok(verdict) => WorkExperienceRelevance {
            score: f32::from(verdict.score.min(100)) / 100.0,
            relevant_positions: verdict.relevant_count,
            total_positions: work_history.len(),
            recent_experience_relevant: verdict.recent_relevant,
            career_progression: verdict.progression,
        },
        Err(e) => {
            log::warn!("Work history judgment failed for job {}: {}", job.id, e);
            WorkExperienceRelevance {
                score: 0.7,
                relevant_positions: 1,
                total_positions: work_history.len(),
                recent_experience_relevant: true,
                career_progression: "Standard".to_string(),
            }
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
