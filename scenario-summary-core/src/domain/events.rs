use crate::domain::SubContentId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Scoring events sent to the reporting bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportEvent {
    /// A single activity (or the static end screen) was answered
    #[serde(rename_all = "camelCase")]
    Answered {
        /// Activity the score belongs to (absent for the end screen)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sub_content_id: Option<SubContentId>,

        score: ScoreBlock,

        /// Free-text response
        #[serde(default, skip_serializing_if = "Option::is_none")]
        response: Option<String>,
    },

    /// Final aggregate for the whole presentation
    Scored {
        raw: f64,
        max: f64,
        reason: ScoredReason,
    },
}

impl ReportEvent {
    pub fn is_scored(&self) -> bool {
        matches!(self, ReportEvent::Scored { .. })
    }
}

/// Score result block of an "answered" event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBlock {
    pub min: f64,
    pub max: f64,
    pub raw: f64,

    /// `raw / max` rounded to 4 decimals, only when `max > 0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaled: Option<f64>,
}

impl ScoreBlock {
    pub fn new(raw: f64, max: f64) -> Self {
        Self {
            min: 0.0,
            max,
            raw,
            scaled: None,
        }
    }

    /// Same block with the scaled ratio filled in when it is defined
    pub fn with_scaled(mut self) -> Self {
        self.scaled = if self.max > 0.0 {
            Some(round4(self.raw / self.max))
        } else {
            None
        };
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoredReason {
    Submitted,
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
