//! Job posting value types

use super::{Embedding, JobId};
use serde::{Deserialize, Serialize};

/// A job posting with its analyzed requirements and precomputed embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: String,
    /// List order defines the critical-skill fallback: when the
    /// classifier is unavailable the first three entries are treated
    /// as critical.
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub min_years_experience: Option<u32>,
    pub max_years_experience: Option<u32>,
    /// Credential keywords, e.g. "Bachelor", "Computer Science".
    pub education_requirements: Vec<String>,
    pub embedding: Embedding,
}
