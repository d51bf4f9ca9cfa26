use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the presentation is judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ScoringMode {
    /// One fixed score attached to the end screen
    #[serde(rename = "static-end-score", alias = "static")]
    Static,

    /// Sum of the scores recorded for visited activities
    #[serde(rename = "dynamic-score", alias = "dynamic")]
    Dynamic,
}

/// Scoring configuration of a presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringConfig {
    /// Active scoring mode
    pub mode: ScoringMode,

    /// Whether scores are shown at all
    pub scoring_enabled: bool,

    /// Report activity scores without the interaction scores the content
    /// already reports on its own
    pub exclude_interaction_scores: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown scoring option: {0}")]
    UnknownScoringOption(String),

    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mode: ScoringMode::Dynamic,
            scoring_enabled: true,
            exclude_interaction_scores: false,
        }
    }
}

impl ScoringConfig {
    pub fn new(mode: ScoringMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Build from a scenario scoring option
    /// (`"static-end-score"`, `"dynamic-score"` or `"no-score"`)
    pub fn from_scoring_option(option: &str) -> Result<Self, ConfigError> {
        match option {
            "static-end-score" => Ok(Self::new(ScoringMode::Static)),
            "dynamic-score" => Ok(Self::new(ScoringMode::Dynamic)),
            "no-score" => Ok(Self::default().with_scoring_enabled(false)),
            other => Err(ConfigError::UnknownScoringOption(other.to_string())),
        }
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_scoring_enabled(mut self, enabled: bool) -> Self {
        self.scoring_enabled = enabled;
        self
    }

    pub fn with_exclude_interaction_scores(mut self, exclude: bool) -> Self {
        self.exclude_interaction_scores = exclude;
        self
    }

    /// Which scoring mode applies (pure read)
    pub fn resolve_mode(&self) -> ScoringMode {
        self.mode
    }
}
