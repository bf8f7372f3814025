//! Simplified scoring for the job-to-candidates direction
//!
//! This direction deliberately does NOT reuse the full aggregator:
//! skill overlap carries no critical-skill penalty, experience uses
//! its own bands, and the tier cuts differ. The asymmetry is part of
//! the externally observed scores; do not unify the two.

use crate::scoring::skills::normalize;
use crate::scoring::RecommendationTier;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Neutral-good fit when the job states no experience requirement.
const UNSPECIFIED_EXPERIENCE_FIT: f32 = 0.8;
/// Fit when the candidate sits above a stated maximum.
const OVERQUALIFIED_FIT: f32 = 0.9;
/// Fit lost per missing year below the minimum.
const UNDERQUALIFIED_PENALTY_PER_YEAR: f32 = 0.2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillOverlap {
    pub score: f32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Plain coverage of the required list, no penalties or bonuses.
/// An empty required list scores 0.0: with nothing to overlap, ranking
/// rests on similarity and experience fit.
pub fn skill_overlap(candidate_skills: &[String], required: &[String]) -> SkillOverlap {
    if required.is_empty() {
        return SkillOverlap {
            score: 0.0,
            matched: Vec::new(),
            missing: Vec::new(),
        };
    }

    let candidate_set: HashSet<String> = candidate_skills.iter().map(|s| normalize(s)).collect();
    let (matched, missing): (Vec<String>, Vec<String>) = required
        .iter()
        .cloned()
        .partition(|s| candidate_set.contains(&normalize(s)));

    SkillOverlap {
        score: matched.len() as f32 / required.len() as f32,
        matched,
        missing,
    }
}

/// Banded experience fit for screening.
pub fn experience_fit(candidate_years: u32, min_years: Option<u32>, max_years: Option<u32>) -> f32 {
    let Some(min_years) = min_years else {
        return UNSPECIFIED_EXPERIENCE_FIT;
    };

    if candidate_years < min_years {
        let gap = (min_years - candidate_years) as f32;
        (1.0 - gap * UNDERQUALIFIED_PENALTY_PER_YEAR).max(0.0)
    } else if max_years.is_some_and(|max| candidate_years > max) {
        OVERQUALIFIED_FIT
    } else {
        1.0
    }
}

/// Screening tier cuts on the 0-1 overall score. These differ from the
/// full report's 85/70/55 percentage thresholds.
pub fn screening_tier(overall_score: f32) -> RecommendationTier {
    if overall_score >= 0.80 {
        RecommendationTier::HighlyRecommended
    } else if overall_score >= 0.65 {
        RecommendationTier::Recommended
    } else if overall_score >= 0.50 {
        RecommendationTier::PotentialFit
    } else {
        RecommendationTier::NotRecommended
    }
}

/// One-line explanation for a screening match.
pub fn match_explanation(
    overlap: &SkillOverlap,
    experience_score: f32,
    candidate_years: u32,
    min_years: Option<u32>,
) -> String {
    let mut parts = Vec::new();

    let total_required = overlap.matched.len() + overlap.missing.len();
    if total_required > 0 {
        parts.push(format!(
            "{}/{} skills matched.",
            overlap.matched.len(),
            total_required
        ));
    } else {
        parts.push("No specific skills required.".to_string());
    }

    if experience_score >= 0.9 {
        parts.push(format!("Experience ({}y) fits well.", candidate_years));
    } else if let Some(min) = min_years {
        if candidate_years < min {
            parts.push(format!("Below exp req ({}y+).", min));
        }
    }

    parts.join(" ")
}
