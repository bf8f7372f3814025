//! Compatibility aggregation: five sub-scores, one explainable report

use crate::capabilities::{CriticalSkillClassifier, WorkHistoryJudge};
use crate::config::ScoringWeights;
use crate::domain::{CandidateProfile, JobRequirement};
use crate::scoring::{
    assess_work_history, match_education, match_experience, match_skills, EducationMatch,
    ExperienceMatch, SemanticSimilarity, SkillMatch, WorkExperienceRelevance,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Critical skills assumed when the classifier is unavailable: the
/// first entries of the required list, in posting order.
const CRITICAL_FALLBACK_COUNT: usize = 3;
/// Missing skills named per recommendation.
const RECOMMENDED_SKILLS_CAP: usize = 3;
/// Missing skills named per interview focus area.
const FOCUS_SKILLS_CAP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    HighlyRecommended,
    Recommended,
    PotentialFit,
    NotRecommended,
}

impl RecommendationTier {
    /// Tier is a pure function of the overall score, strict thresholds.
    pub fn from_score(overall_score: u8) -> Self {
        if overall_score >= 85 {
            RecommendationTier::HighlyRecommended
        } else if overall_score >= 70 {
            RecommendationTier::Recommended
        } else if overall_score >= 55 {
            RecommendationTier::PotentialFit
        } else {
            RecommendationTier::NotRecommended
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    ForCandidate,
    ForHr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub audience: Audience,
    pub priority: Priority,
    pub recommendation: String,
}

/// Full compatibility report for one (candidate, job) pair.
/// Computed fresh on every call and never mutated in place; caching is
/// the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub overall_score: u8,
    pub match_percentage: u8,
    pub recommendation: RecommendationTier,

    pub skill_match: SkillMatch,
    pub experience_match: ExperienceMatch,
    pub education_match: EducationMatch,
    pub work_experience_relevance: WorkExperienceRelevance,
    pub semantic_similarity: SemanticSimilarity,

    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub interview_focus_areas: Vec<String>,
}

/// Stateless aggregator over the five scoring components.
///
/// Constructed once at process start with its judgment capabilities
/// injected; safe to share across independent invocations.
pub struct CompatibilityScorer {
    classifier: Arc<dyn CriticalSkillClassifier>,
    judge: Arc<dyn WorkHistoryJudge>,
    weights: ScoringWeights,
}

impl CompatibilityScorer {
    pub fn new(
        classifier: Arc<dyn CriticalSkillClassifier>,
        judge: Arc<dyn WorkHistoryJudge>,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            classifier,
            judge,
            weights,
        }
    }

    /// Score one candidate against one job, given the precomputed
    /// semantic similarity of their embeddings.
    ///
    /// Infallible by design: capability failures degrade to documented
    /// fallbacks and the worst input still yields a complete report.
    pub async fn score(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
        semantic_similarity: f32,
    ) -> CompatibilityScore {
        let critical_skills = self.critical_skills(job).await;

        let skill_match = match_skills(
            &candidate.skills,
            &job.required_skills,
            &job.preferred_skills,
            &critical_skills,
        );
        let experience_match = match_experience(
            candidate.experience_years,
            job.min_years_experience,
            job.max_years_experience,
        );
        let education_match = match_education(&candidate.education, &job.education_requirements);
        let work_relevance =
            assess_work_history(self.judge.as_ref(), job, &candidate.work_history).await;
        let semantic = SemanticSimilarity::interpret(semantic_similarity);

        let overall_score = self.weighted_overall(
            skill_match.score,
            experience_match.score,
            education_match.score,
            work_relevance.score,
            semantic.score,
        );

        let recommendation = RecommendationTier::from_score(overall_score);
        let (strengths, weaknesses) = generate_strengths_weaknesses(
            &skill_match,
            &experience_match,
            &education_match,
            &work_relevance,
            &semantic,
        );
        let recommendations = generate_recommendations(&weaknesses, &skill_match.critical_missing);
        let interview_focus_areas = generate_interview_focus(&skill_match, &experience_match);

        CompatibilityScore {
            overall_score,
            match_percentage: overall_score,
            recommendation,
            skill_match,
            experience_match,
            education_match,
            work_experience_relevance: work_relevance,
            semantic_similarity: semantic,
            strengths,
            weaknesses,
            recommendations,
            interview_focus_areas,
        }
    }

    /// Ask the classifier which required skills are must-haves.
    /// Fails open to the head of the required list in posting order.
    async fn critical_skills(&self, job: &JobRequirement) -> Vec<String> {
        if job.required_skills.is_empty() {
            return Vec::new();
        }

        match self
            .classifier
            .classify(&job.description, &job.required_skills)
            .await
        {
            Ok(critical) => critical,
            Err(e) => {
                log::warn!("Critical skill detection failed for job {}: {}", job.id, e);
                job.required_skills
                    .iter()
                    .take(CRITICAL_FALLBACK_COUNT)
                    .cloned()
                    .collect()
            }
        }
    }

    fn weighted_overall(
        &self,
        skill: f32,
        experience: f32,
        education: f32,
        work: f32,
        semantic: f32,
    ) -> u8 {
        let weighted = (skill * 100.0 * self.weights.skills)
            + (experience * 100.0 * self.weights.experience)
            + (education * 100.0 * self.weights.education)
            + (work * 100.0 * self.weights.work_history)
            + (semantic * 100.0 * self.weights.semantic);
        weighted.round().clamp(0.0, 100.0) as u8
    }
}

fn generate_strengths_weaknesses(
    skill: &SkillMatch,
    experience: &ExperienceMatch,
    education: &EducationMatch,
    work: &WorkExperienceRelevance,
    semantic: &SemanticSimilarity,
) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    if skill.score > 0.8 {
        strengths.push("Strong technical skill match".to_string());
    }
    if !skill.critical_missing.is_empty() {
        weaknesses.push(format!(
            "Missing critical skills: {}",
            skill.critical_missing.join(", ")
        ));
    }

    if experience.meets_or_exceeds() {
        strengths.push(experience.details.clone());
    } else {
        weaknesses.push(experience.details.clone());
    }

    if education.meets_requirement {
        strengths.push("Education requirements met".to_string());
    }

    if work.score > 0.8 {
        strengths.push("Highly relevant work history".to_string());
    }

    if semantic.score > 0.8 {
        strengths.push("Resume content strongly aligns with job description".to_string());
    }

    (strengths, weaknesses)
}

fn generate_recommendations(
    weaknesses: &[String],
    critical_missing: &[String],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if !critical_missing.is_empty() {
        let named: Vec<&str> = critical_missing
            .iter()
            .take(RECOMMENDED_SKILLS_CAP)
            .map(String::as_str)
            .collect();
        recommendations.push(Recommendation {
            audience: Audience::ForCandidate,
            priority: Priority::High,
            recommendation: format!("Consider upskilling in: {}", named.join(", ")),
        });
        recommendations.push(Recommendation {
            audience: Audience::ForHr,
            priority: Priority::Medium,
            recommendation: format!(
                "Probe depth of knowledge in {} during interview",
                named.join(", ")
            ),
        });
    }

    if recommendations.is_empty() && weaknesses.is_empty() {
        recommendations.push(Recommendation {
            audience: Audience::ForHr,
            priority: Priority::High,
            recommendation: "Proceed to interview ideally.".to_string(),
        });
    }

    recommendations
}

fn generate_interview_focus(skill: &SkillMatch, experience: &ExperienceMatch) -> Vec<String> {
    let mut areas = Vec::new();

    if !skill.missing_required.is_empty() {
        let named: Vec<&str> = skill
            .missing_required
            .iter()
            .take(FOCUS_SKILLS_CAP)
            .map(String::as_str)
            .collect();
        areas.push(format!("Verify knowledge gaps in: {}", named.join(", ")));
    }
    if experience.gap > 0 {
        areas.push("discuss ability to ramp up given experience gap".to_string());
    }

    areas.push("Career progression and recent projects".to_string());
    areas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{JobContext, WorkHistoryVerdict};
    use crate::domain::{CandidateId, EducationRecord, JobId, WorkHistoryEntry};
    use crate::Config;
    use async_trait::async_trait;

    struct FixedClassifier(Vec<String>);

    #[async_trait]
    impl CriticalSkillClassifier for FixedClassifier {
        async fn classify(
            &self,
            _job_description: &str,
            _required_skills: &[String],
        ) -> anyhow::Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    struct FailingClassifier;

    #[async_trait]
    impl CriticalSkillClassifier for FailingClassifier {
        async fn classify(
            &self,
            _job_description: &str,
            _required_skills: &[String],
        ) -> anyhow::Result<Vec<String>> {
            anyhow::bail!("classifier unavailable")
        }
    }

    struct FixedJudge(u8);

    #[async_trait]
    impl WorkHistoryJudge for FixedJudge {
        async fn assess(
            &self,
            _job: &JobContext,
            work_history: &[WorkHistoryEntry],
        ) -> anyhow::Result<WorkHistoryVerdict> {
            Ok(WorkHistoryVerdict {
                score: self.0,
                relevant_count: work_history.len(),
                recent_relevant: true,
                progression: "Positive".to_string(),
            })
        }
    }

    fn scorer(classifier: impl CriticalSkillClassifier + 'static) -> CompatibilityScorer {
        CompatibilityScorer::new(
            Arc::new(classifier),
            Arc::new(FixedJudge(80)),
            Config::default().scoring,
        )
    }

    fn candidate(skills: &[&str], years: u32) -> CandidateProfile {
        CandidateProfile {
            id: CandidateId(1),
            name: Some("Jane Doe".to_string()),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_years: Some(years),
            education: vec![EducationRecord {
                degree: Some("BSc Computer Science".to_string()),
                institution: Some("TU Delft".to_string()),
                year: Some("2016".to_string()),
            }],
            work_history: vec![WorkHistoryEntry {
                title: Some("Backend Engineer".to_string()),
                company: Some("Acme".to_string()),
                duration: Some("3 years".to_string()),
                description: None,
            }],
            embedding: vec![1.0, 0.0],
        }
    }

    fn job(required: &[&str]) -> JobRequirement {
        JobRequirement {
            id: JobId(7),
            title: "Senior Backend Engineer".to_string(),
            company: "Globex".to_string(),
            location: Some("Amsterdam".to_string()),
            description: "Design and run backend services.".to_string(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: vec!["Kubernetes".to_string()],
            min_years_experience: Some(5),
            max_years_experience: None,
            education_requirements: vec!["Computer Science".to_string()],
            embedding: vec![1.0, 0.0],
        }
    }

    #[test]
    fn tier_boundaries_are_strict() {
        assert_eq!(RecommendationTier::from_score(54), RecommendationTier::NotRecommended);
        assert_eq!(RecommendationTier::from_score(55), RecommendationTier::PotentialFit);
        assert_eq!(RecommendationTier::from_score(69), RecommendationTier::PotentialFit);
        assert_eq!(RecommendationTier::from_score(70), RecommendationTier::Recommended);
        assert_eq!(RecommendationTier::from_score(84), RecommendationTier::Recommended);
        assert_eq!(RecommendationTier::from_score(85), RecommendationTier::HighlyRecommended);
    }

    #[test]
    fn recommendation_serializes_with_original_wire_names() {
        let rec = Recommendation {
            audience: Audience::ForHr,
            priority: Priority::Medium,
            recommendation: "Probe".to_string(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "for_hr");
        assert_eq!(json["priority"], "medium");
        assert_eq!(
            serde_json::to_value(RecommendationTier::HighlyRecommended).unwrap(),
            "highly_recommended"
        );
    }

    #[tokio::test]
    async fn overall_is_rounded_weighted_sum_of_sub_scores() {
        let scorer = scorer(FixedClassifier(vec!["FastAPI".to_string()]));
        let report = scorer
            .score(
                &candidate(&["Python", "Docker"], 3),
                &job(&["Python", "FastAPI", "PostgreSQL"]),
                0.6,
            )
            .await;

        // Recompute the invariant from the reported sub-scores.
        let expected = (report.skill_match.score * 100.0 * 0.40
            + report.experience_match.score * 100.0 * 0.25
            + report.education_match.score * 100.0 * 0.15
            + report.work_experience_relevance.score * 100.0 * 0.10
            + report.semantic_similarity.score * 100.0 * 0.10)
            .round() as u8;
        assert_eq!(report.overall_score, expected);
        assert_eq!(report.match_percentage, report.overall_score);
        assert_eq!(
            report.recommendation,
            RecommendationTier::from_score(report.overall_score)
        );

        // Worked sub-scores: skill 0.18, experience 0.70, education 1.0,
        // work 0.80, semantic 0.60 -> round(7.2 + 17.5 + 15 + 8 + 6) = 54.
        assert_eq!(report.skill_match.score, 0.18);
        assert_eq!(report.experience_match.score, 0.70);
        assert_eq!(report.overall_score, 54);
        assert_eq!(report.recommendation, RecommendationTier::NotRecommended);
    }

    #[tokio::test]
    async fn every_sub_score_stays_in_unit_range() {
        let scorer = scorer(FailingClassifier);
        let report = scorer
            .score(&candidate(&[], 0), &job(&["Rust", "AWS", "Kafka", "Go"]), 1.4)
            .await;

        for score in [
            report.skill_match.score,
            report.experience_match.score,
            report.education_match.score,
            report.work_experience_relevance.score,
            report.semantic_similarity.score,
        ] {
            assert!((0.0..=1.0).contains(&score), "sub-score out of range: {}", score);
        }
        assert!(report.overall_score <= 100);
    }

    #[tokio::test]
    async fn classifier_failure_falls_back_to_first_three_required() {
        let scorer = scorer(FailingClassifier);
        let report = scorer
            .score(&candidate(&[], 8), &job(&["Rust", "AWS", "Kafka", "Go"]), 0.5)
            .await;

        // All required are missing; the fallback flags the first three.
        assert_eq!(
            report.skill_match.critical_missing,
            vec!["Rust".to_string(), "AWS".to_string(), "Kafka".to_string()]
        );
    }

    #[tokio::test]
    async fn critical_gaps_drive_recommendations() {
        let scorer = scorer(FixedClassifier(vec!["FastAPI".to_string()]));
        let report = scorer
            .score(
                &candidate(&["Python"], 3),
                &job(&["Python", "FastAPI", "PostgreSQL"]),
                0.4,
            )
            .await;

        assert_eq!(report.recommendations.len(), 2);
        let upskill = &report.recommendations[0];
        assert_eq!(upskill.audience, Audience::ForCandidate);
        assert_eq!(upskill.priority, Priority::High);
        assert!(upskill.recommendation.contains("FastAPI"));
        let probe = &report.recommendations[1];
        assert_eq!(probe.audience, Audience::ForHr);
        assert_eq!(probe.priority, Priority::Medium);

        assert!(report
            .weaknesses
            .iter()
            .any(|w| w.contains("Missing critical skills: FastAPI")));
    }

    #[tokio::test]
    async fn clean_report_recommends_proceeding() {
        let scorer = scorer(FixedClassifier(Vec::new()));
        let report = scorer
            .score(&candidate(&["Python", "Kubernetes"], 8), &job(&["Python"]), 0.9)
            .await;

        assert!(report.weaknesses.is_empty());
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.recommendations[0].audience, Audience::ForHr);
        assert_eq!(report.recommendations[0].priority, Priority::High);
        assert_eq!(report.recommendations[0].recommendation, "Proceed to interview ideally.");

        assert!(report.strengths.contains(&"Strong technical skill match".to_string()));
        assert!(report.strengths.contains(&"Education requirements met".to_string()));
        assert!(report
            .strengths
            .contains(&"Resume content strongly aligns with job description".to_string()));
    }

    #[tokio::test]
    async fn interview_focus_names_gaps_and_always_closes_with_progression() {
        let scorer = scorer(FixedClassifier(Vec::new()));
        let report = scorer
            .score(
                &candidate(&["Python"], 3),
                &job(&["Python", "FastAPI", "PostgreSQL", "Redis"]),
                0.5,
            )
            .await;

        assert_eq!(report.interview_focus_areas.len(), 3);
        assert!(report.interview_focus_areas[0].contains("FastAPI, PostgreSQL"));
        assert!(!report.interview_focus_areas[0].contains("Redis"));
        assert!(report.interview_focus_areas[1].contains("experience gap"));
        assert_eq!(
            report.interview_focus_areas.last().unwrap(),
            "Career progression and recent projects"
        );

        let clean = scorer
            .score(&candidate(&["Python"], 8), &job(&["Python"]), 0.9)
            .await;
        assert_eq!(
            clean.interview_focus_areas,
            vec!["Career progression and recent projects".to_string()]
        );
    }
}
