//! Candidate profile value types

use super::{CandidateId, Embedding};
use serde::{Deserialize, Serialize};

/// A parsed candidate profile with its precomputed embedding.
///
/// Parsing the source document and generating the embedding are the
/// caller's concern; this type only carries the structured result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: CandidateId,
    pub name: Option<String>,
    pub skills: Vec<String>,
    /// Total years of professional experience; absent is treated as 0.
    pub experience_years: Option<u32>,
    pub education: Vec<EducationRecord>,
    /// Ordered most-recent-first.
    pub work_history: Vec<WorkHistoryEntry>,
    pub embedding: Embedding,
}

impl CandidateProfile {
    /// Display name with the conventional fallback for unparsed CVs.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown Candidate")
    }

    pub fn experience_years_or_zero(&self) -> u32 {
        self.experience_years.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationRecord {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
}

impl EducationRecord {
    /// Flatten to a single comparable line, e.g. "BSc in MIT".
    /// Absent parts are omitted rather than rendered as placeholders.
    pub fn display_line(&self) -> String {
        match (self.degree.as_deref(), self.institution.as_deref()) {
            (Some(degree), Some(institution)) => format!("{} in {}", degree, institution),
            (Some(degree), None) => degree.to_string(),
            (None, Some(institution)) => institution.to_string(),
            (None, None) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkHistoryEntry {
    pub title: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}
