//! Years-of-experience banded scoring

use serde::{Deserialize, Serialize};

/// Years past the stated maximum before the overqualification band kicks in.
const OVERQUALIFICATION_BUFFER: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceAssessment {
    Exceeds,
    MeetsRequirement,
    SlightlyBelow,
    SignificantlyBelow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceMatch {
    pub score: f32,
    pub candidate_years: u32,
    pub required_years: u32,
    pub gap: u32,
    pub assessment: ExperienceAssessment,
    pub details: String,
}

impl ExperienceMatch {
    pub fn meets_or_exceeds(&self) -> bool {
        matches!(
            self.assessment,
            ExperienceAssessment::MeetsRequirement | ExperienceAssessment::Exceeds
        )
    }
}

/// Band a candidate's experience against the job's bounds.
///
/// Meeting the minimum scores 1.0, softened to 0.95 well past a stated
/// maximum. Below the minimum the score steps down with the gap:
/// one year 0.85, two years 0.70, more 0.50.
pub fn match_experience(
    candidate_years: Option<u32>,
    min_years: Option<u32>,
    max_years: Option<u32>,
) -> ExperienceMatch {
    let candidate_years = candidate_years.unwrap_or(0);
    let min_years = min_years.unwrap_or(0);

    if candidate_years >= min_years {
        let overqualified =
            max_years.is_some_and(|max| candidate_years > max + OVERQUALIFICATION_BUFFER);

        let (score, assessment, details) = if overqualified {
            (
                0.95,
                ExperienceAssessment::Exceeds,
                format!("{} years exceeds requirement significantly.", candidate_years),
            )
        } else {
            let assessment = if candidate_years > min_years {
                ExperienceAssessment::Exceeds
            } else {
                ExperienceAssessment::MeetsRequirement
            };
            (
                1.0,
                assessment,
                format!(
                    "{} years meets the {}+ years requirement.",
                    candidate_years, min_years
                ),
            )
        };

        return ExperienceMatch {
            score,
            candidate_years,
            required_years: min_years,
            gap: 0,
            assessment,
            details,
        };
    }

    let gap = min_years - candidate_years;
    let (score, assessment, details) = if gap <= 1 {
        (
            0.85,
            ExperienceAssessment::SlightlyBelow,
            format!(
                "{} years is slightly below the {} years requirement.",
                candidate_years, min_years
            ),
        )
    } else if gap <= 2 {
        (
            0.70,
            ExperienceAssessment::SignificantlyBelow,
            "Missing 2 years of required experience.".to_string(),
        )
    } else {
        (
            0.50,
            ExperienceAssessment::SignificantlyBelow,
            format!("Significant experience gap ({} years).", gap),
        )
    };

    ExperienceMatch {
        score,
        candidate_years,
        required_years: min_years,
        gap,
        assessment,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_bands_have_exact_breakpoints() {
        // gap 0 / 1 / 2 / 3 -> 1.0 / 0.85 / 0.70 / 0.50
        assert_eq!(match_experience(Some(5), Some(5), None).score, 1.0);
        assert_eq!(match_experience(Some(4), Some(5), None).score, 0.85);
        assert_eq!(match_experience(Some(3), Some(5), None).score, 0.70);
        assert_eq!(match_experience(Some(2), Some(5), None).score, 0.50);
    }

    #[test]
    fn two_year_gap_is_significantly_below() {
        let result = match_experience(Some(3), Some(5), None);
        assert_eq!(result.score, 0.70);
        assert_eq!(result.gap, 2);
        assert_eq!(result.assessment, ExperienceAssessment::SignificantlyBelow);
    }

    #[test]
    fn meeting_exactly_is_meets_requirement() {
        let result = match_experience(Some(5), Some(5), None);
        assert_eq!(result.assessment, ExperienceAssessment::MeetsRequirement);
        assert_eq!(result.gap, 0);
    }

    #[test]
    fn above_minimum_exceeds() {
        let result = match_experience(Some(8), Some(5), None);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.assessment, ExperienceAssessment::Exceeds);
    }

    #[test]
    fn far_past_maximum_softens_score() {
        let result = match_experience(Some(16), Some(3), Some(10));
        assert_eq!(result.score, 0.95);
        assert_eq!(result.assessment, ExperienceAssessment::Exceeds);

        // Within the buffer the score stays perfect.
        let result = match_experience(Some(15), Some(3), Some(10));
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn absent_years_default_to_zero() {
        let result = match_experience(None, None, None);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.candidate_years, 0);
        assert_eq!(result.required_years, 0);
        assert_eq!(result.assessment, ExperienceAssessment::MeetsRequirement);

        let result = match_experience(None, Some(4), None);
        assert_eq!(result.score, 0.50);
        assert_eq!(result.gap, 4);
    }
}
