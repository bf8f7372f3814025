//! Configuration management for the talent matcher

use crate::error::{Result, TalentMatcherError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringWeights,
    pub screening: ScreeningWeights,
    pub retrieval: RetrievalConfig,
}

/// Weights for the full compatibility aggregation. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f32,
    pub experience: f32,
    pub education: f32,
    pub work_history: f32,
    pub semantic: f32,
}

/// Weights for the simplified job-to-candidates screening pass.
/// Deliberately distinct from [`ScoringWeights`]; see matching::screening.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreeningWeights {
    pub similarity: f32,
    pub skills: f32,
    pub experience: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Neighbors fetched per requested result, to survive post-filtering.
    pub oversample_factor: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringWeights {
                skills: 0.40,
                experience: 0.25,
                education: 0.15,
                work_history: 0.10,
                semantic: 0.10,
            },
            screening: ScreeningWeights {
                similarity: 0.4,
                skills: 0.4,
                experience: 0.2,
            },
            retrieval: RetrievalConfig {
                oversample_factor: 2,
            },
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f32 {
        self.skills + self.experience + self.education + self.work_history + self.semantic
    }
}

impl ScreeningWeights {
    pub fn sum(&self) -> f32 {
        self.similarity + self.skills + self.experience
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| TalentMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| TalentMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("talent-matcher")
            .join("config.toml")
    }

    /// Reject weight sets that would silently rescale scores.
    pub fn validate(&self) -> Result<()> {
        if (self.scoring.sum() - 1.0).abs() > 1e-3 {
            return Err(TalentMatcherError::Configuration(format!(
                "Scoring weights must sum to 1.0, got {:.3}",
                self.scoring.sum()
            )));
        }
        if (self.screening.sum() - 1.0).abs() > 1e-3 {
            return Err(TalentMatcherError::Configuration(format!(
                "Screening weights must sum to 1.0, got {:.3}",
                self.screening.sum()
            )));
        }
        if self.retrieval.oversample_factor < 2 {
            return Err(TalentMatcherError::Configuration(
                "Retrieval oversample factor must be at least 2".to_string(),
            ));
        }
        Ok(())
    }
}
