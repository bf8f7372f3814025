//! Credential keyword matching

use crate::domain::EducationRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationMatch {
    pub score: f32,
    pub candidate_education: Vec<String>,
    pub required_education: Vec<String>,
    pub meets_requirement: bool,
}

/// Match required credential keywords against the candidate's
/// education, flattened to "degree in institution" lines.
///
/// A keyword matches if it appears case-insensitively inside any line.
/// No requirements is a trivial pass; unmatched candidates keep 0.7 if
/// they have any education at all and drop to 0.4 with none.
pub fn match_education(education: &[EducationRecord], required: &[String]) -> EducationMatch {
    if required.is_empty() {
        return EducationMatch {
            score: 1.0,
            candidate_education: Vec::new(),
            required_education: Vec::new(),
            meets_requirement: true,
        };
    }

    let lines: Vec<String> = education.iter().map(|e| e.display_line()).collect();

    let meets_requirement = required.iter().any(|req| {
        let req_lower = req.to_lowercase();
        lines
            .iter()
            .any(|line| line.to_lowercase().contains(&req_lower))
    });

    let score = if meets_requirement {
        1.0
    } else if lines.is_empty() {
        0.4
    } else {
        0.7
    };

    EducationMatch {
        score,
        candidate_education: lines,
        required_education: required.to_vec(),
        meets_requirement,
    }
}
