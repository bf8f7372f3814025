//! Set-based skill overlap scoring with critical-skill penalty

use super::round2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Penalty per missing critical skill.
const CRITICAL_MISSING_PENALTY: f32 = 0.15;
/// Bonus per matched preferred skill.
const PREFERRED_MATCH_BONUS: f32 = 0.05;
/// Cap on reported additional candidate skills.
const ADDITIONAL_SKILLS_CAP: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    pub score: f32,
    pub matched_required: Vec<String>,
    pub missing_required: Vec<String>,
    pub matched_preferred: Vec<String>,
    pub missing_preferred: Vec<String>,
    pub additional_skills: Vec<String>,
    pub match_rate: f32,
    pub critical_missing: Vec<String>,
}

/// Skill strings are compared trimmed and lowercased.
pub(crate) fn normalize(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Score a candidate's skills against a job's required and preferred
/// lists. `critical` is the must-have subset of `required` (from the
/// classifier or its fallback); each one missing costs
/// [`CRITICAL_MISSING_PENALTY`].
pub fn match_skills(
    candidate_skills: &[String],
    required: &[String],
    preferred: &[String],
    critical: &[String],
) -> SkillMatch {
    if required.is_empty() {
        // Nothing required: no blockers on the skill front.
        return SkillMatch {
            score: 1.0,
            matched_required: Vec::new(),
            missing_required: Vec::new(),
            matched_preferred: Vec::new(),
            missing_preferred: Vec::new(),
            additional_skills: Vec::new(),
            match_rate: 1.0,
            critical_missing: Vec::new(),
        };
    }

    let candidate_set: HashSet<String> = candidate_skills.iter().map(|s| normalize(s)).collect();

    let (matched_required, missing_required): (Vec<String>, Vec<String>) = required
        .iter()
        .cloned()
        .partition(|s| candidate_set.contains(&normalize(s)));
    let (matched_preferred, missing_preferred): (Vec<String>, Vec<String>) = preferred
        .iter()
        .cloned()
        .partition(|s| candidate_set.contains(&normalize(s)));

    let critical_set: HashSet<String> = critical.iter().map(|s| normalize(s)).collect();
    let critical_missing: Vec<String> = missing_required
        .iter()
        .filter(|s| critical_set.contains(&normalize(s)))
        .cloned()
        .collect();

    let coverage = matched_required.len() as f32 / required.len() as f32;
    let penalty = critical_missing.len() as f32 * CRITICAL_MISSING_PENALTY;
    let bonus = matched_preferred.len() as f32 * PREFERRED_MATCH_BONUS;
    let score = (coverage - penalty + bonus).clamp(0.0, 1.0);

    let job_skills: HashSet<String> = required
        .iter()
        .chain(preferred.iter())
        .map(|s| normalize(s))
        .collect();
    let additional_skills: Vec<String> = candidate_skills
        .iter()
        .filter(|s| !job_skills.contains(&normalize(s)))
        .take(ADDITIONAL_SKILLS_CAP)
        .cloned()
        .collect();

    SkillMatch {
        score: round2(score),
        matched_required,
        missing_required,
        matched_preferred,
        missing_preferred,
        additional_skills,
        match_rate: round2(coverage),
        critical_missing,
    }
}
