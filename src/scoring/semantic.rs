//! Qualitative interpretation of semantic similarity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticSimilarity {
    pub score: f32,
    pub interpretation: String,
}

impl SemanticSimilarity {
    /// Label a precomputed similarity score. The input is clamped into
    /// [0,1] so retrievers with out-of-range conventions (negative
    /// cosine, distances past 1) cannot break the sub-score invariant.
    pub fn interpret(score: f32) -> Self {
        let score = score.clamp(0.0, 1.0);
        let interpretation = if score > 0.85 {
            "Very strong semantic match"
        } else if score > 0.70 {
            "Strong match"
        } else if score > 0.50 {
            "Moderate match"
        } else {
            "Low semantic match"
        };

        Self {
            score,
            interpretation: interpretation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_thresholds() {
        assert_eq!(SemanticSimilarity::interpret(0.90).interpretation, "Very strong semantic match");
        assert_eq!(SemanticSimilarity::interpret(0.85).interpretation, "Strong match");
        assert_eq!(SemanticSimilarity::interpret(0.71).interpretation, "Strong match");
        assert_eq!(SemanticSimilarity::interpret(0.70).interpretation, "Moderate match");
        assert_eq!(SemanticSimilarity::interpret(0.51).interpretation, "Moderate match");
        assert_eq!(SemanticSimilarity::interpret(0.50).interpretation, "Low semantic match");
        assert_eq!(SemanticSimilarity::interpret(0.10).interpretation, "Low semantic match");
    }

    #[test]
    fn out_of_range_scores_clamp() {
        assert_eq!(SemanticSimilarity::interpret(-0.3).score, 0.0);
        assert_eq!(SemanticSimilarity::interpret(1.4).score, 1.0);
    }
}
