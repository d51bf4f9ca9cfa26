use crate::domain::ContentType;
use crate::traits::ContentCapabilities;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sub-content ID (unique within a presentation)
pub type SubContentId = Uuid;

/// A sub-activity embedded in the presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInstance {
    /// Unique ID
    pub sub_content_id: SubContentId,

    /// Library type tag, resolved from the machine name on construction
    #[schemars(with = "String")]
    pub machine_name: ContentType,

    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Self-declared task flag (overrides the catalog when present)
    #[serde(default, rename = "isTask", skip_serializing_if = "Option::is_none")]
    pub declared_task: Option<bool>,

    /// Score the content reports for itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Max score the content reports for itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
}

impl ActivityInstance {
    pub fn new(sub_content_id: SubContentId, machine_name: &str) -> Self {
        Self {
            sub_content_id,
            machine_name: ContentType::parse(machine_name),
            title: None,
            declared_task: None,
            score: None,
            max_score: None,
        }
    }

    /// Snapshot a live content instance
    pub fn from_content<C>(sub_content_id: SubContentId, content: &C) -> Self
    where
        C: ContentCapabilities + ?Sized,
    {
        Self {
            sub_content_id,
            machine_name: ContentType::parse(content.machine_name()),
            title: content.title().map(str::to_string),
            declared_task: content.is_task(),
            score: content.score(),
            max_score: content.max_score(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_declared_task(mut self, is_task: bool) -> Self {
        self.declared_task = Some(is_task);
        self
    }

    pub fn with_own_score(mut self, score: f64, max_score: f64) -> Self {
        self.score = Some(score);
        self.max_score = Some(max_score);
        self
    }

    pub fn content_type(&self) -> &ContentType {
        &self.machine_name
    }

    /// Title for display, falling back to the machine name
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or_else(|| self.machine_name.machine_name())
    }
}

/// Score recorded for a visited sub-activity (dynamic scoring)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub sub_content_id: SubContentId,

    pub score: f64,

    pub max_score: f64,

    /// Content title recorded with the score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ScoreRecord {
    pub fn new(sub_content_id: SubContentId, score: f64, max_score: f64) -> Self {
        Self {
            sub_content_id,
            score,
            max_score,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Activity produced no scorable outcome (0/0)
    pub fn is_unscored(&self) -> bool {
        self.score == 0.0 && self.max_score == 0.0
    }
}

/// Context of the screen the scenario ended on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScreenData {
    pub is_start_screen: bool,

    #[serde(default)]
    pub end_screen_text: String,

    #[serde(default)]
    pub score: f64,

    #[serde(default)]
    pub max_score: f64,
}

impl ScreenData {
    /// An end screen carrying a fixed score
    pub fn end_screen(text: impl Into<String>, score: f64, max_score: f64) -> Self {
        Self {
            is_start_screen: false,
            end_screen_text: text.into(),
            score,
            max_score,
        }
    }

    pub fn start_screen() -> Self {
        Self {
            is_start_screen: true,
            end_screen_text: String::new(),
            score: 0.0,
            max_score: 0.0,
        }
    }
}
