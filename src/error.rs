//! Error handling for the talent matcher engine

use crate::domain::{CandidateId, JobId};
use thiserror::Error;

/// Errors surfaced to callers. Capability failures (classifier, judge)
/// and per-item batch failures never appear here: both are always
/// recovered locally with documented fallbacks.
#[derive(Error, Debug)]
pub enum TalentMatcherError {
    #[error("Candidate not found: {0}")]
    CandidateNotFound(CandidateId),

    #[error("Job not found: {0}")]
    JobNotFound(JobId),

    #[error("Vector retrieval error: {0}")]
    Retrieval(String),

    #[error("Entity store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TalentMatcherError>;
