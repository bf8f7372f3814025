//! Shared value types for candidates and job postings
//! All inputs are explicit immutable records; optional fields are
//! explicitly nullable rather than duck-typed.

pub mod candidate;
pub mod job;

pub use candidate::{CandidateProfile, EducationRecord, WorkHistoryEntry};
pub use job::JobRequirement;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-length semantic embedding vector, precomputed by the caller.
pub type Embedding = Vec<f32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
