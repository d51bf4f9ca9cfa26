use crate::config::ScoringConfig;
use crate::domain::aggregate::{aggregate_and_emit, AggregateResult};
use crate::domain::eligibility::has_eligible_activity;
use crate::domain::summary::{build_rows, ScoreSource, SummaryRow};
use crate::domain::{ActivityInstance, ScoreRecord, ScreenData, SubContentId};
use crate::traits::ReportingBus;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation aggregate root: the sub-activities and their recorded scores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// Scoring configuration
    #[serde(default)]
    config: ScoringConfig,

    /// Embedded in another content (summary is left to the outer one)
    #[serde(default)]
    embedded: bool,

    /// Sub-activities in registration order
    #[serde(default)]
    instances: Vec<ActivityInstance>,

    /// Dynamic-mode scores in visit order
    #[serde(default)]
    score_records: Vec<ScoreRecord>,
}

/// Errors that can occur in summary operations
#[derive(Debug, thiserror::Error, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum SessionError {
    #[error("Instance already registered: {0}")]
    DuplicateInstance(SubContentId),

    #[error("Instance not registered: {0}")]
    UnknownInstance(SubContentId),

    #[error("Invalid score {score}/{max_score}")]
    InvalidScore { score: f64, max_score: f64 },

    #[error("Scores cannot change while the summary is open")]
    ScoresLocked,

    #[error("Summary is not available")]
    SummaryNotOffered,

    #[error("Summary is already open")]
    SummaryAlreadyShown,

    #[error("Summary is not open")]
    SummaryNotShown,
}

/// Why completing the presentation did not offer a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotOfferedReason {
    StartScreen,
    Embedded,
    ScoringDisabled,
    NoEligibleActivities,
}

impl fmt::Display for NotOfferedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            NotOfferedReason::StartScreen => "start screen",
            NotOfferedReason::Embedded => "embedded in another content",
            NotOfferedReason::ScoringDisabled => "scoring disabled",
            NotOfferedReason::NoEligibleActivities => "no scorable activities",
        };
        f.write_str(reason)
    }
}

impl Presentation {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    // ===== Getters =====

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    pub fn instances(&self) -> &[ActivityInstance] {
        &self.instances
    }

    pub fn get_instance(&self, sub_content_id: SubContentId) -> Option<&ActivityInstance> {
        self.instances
            .iter()
            .find(|i| i.sub_content_id == sub_content_id)
    }

    pub fn score_records(&self) -> &[ScoreRecord] {
        &self.score_records
    }

    // ===== Content =====

    /// Register a sub-activity; each sub-content ID may appear once
    pub fn register_instance(&mut self, instance: ActivityInstance) -> Result<(), SessionError> {
        if self.get_instance(instance.sub_content_id).is_some() {
            return Err(SessionError::DuplicateInstance(instance.sub_content_id));
        }

        tracing::debug!(
            "Registered {} ({})",
            instance.sub_content_id,
            instance.content_type()
        );
        self.instances.push(instance);
        Ok(())
    }

    /// Append a score for a visited activity
    ///
    /// Scores must be finite and non-negative.
    pub fn record_score(&mut self, record: ScoreRecord) -> Result<(), SessionError> {
        check_score(record.score, record.max_score)?;

        tracing::debug!(
            "Recorded score {}/{} for {}",
            record.score,
            record.max_score,
            record.sub_content_id
        );
        self.score_records.push(record);
        Ok(())
    }

    /// Replace the score an instance reports for itself
    ///
    /// Hosts call this as the content's own score changes, so the value
    /// subtracted on submission is the current one.
    pub fn update_instance_score(
        &mut self,
        sub_content_id: SubContentId,
        score: f64,
        max_score: f64,
    ) -> Result<(), SessionError> {
        check_score(score, max_score)?;

        let instance = self
            .instances
            .iter_mut()
            .find(|i| i.sub_content_id == sub_content_id)
            .ok_or(SessionError::UnknownInstance(sub_content_id))?;

        instance.score = Some(score);
        instance.max_score = Some(max_score);

        tracing::debug!(
            "Instance {} now reports {}/{}",
            sub_content_id,
            score,
            max_score
        );
        Ok(())
    }

    // ===== Summary =====

    pub fn has_eligible_activity(&self) -> bool {
        has_eligible_activity(&self.instances)
    }

    /// Checks whether reaching `screen` offers a summary
    pub fn check_summary_offer(&self, screen: &ScreenData) -> Result<(), NotOfferedReason> {
        if screen.is_start_screen {
            return Err(NotOfferedReason::StartScreen);
        }
        if self.embedded {
            return Err(NotOfferedReason::Embedded);
        }
        if !self.config.scoring_enabled {
            return Err(NotOfferedReason::ScoringDisabled);
        }
        if !self.has_eligible_activity() {
            return Err(NotOfferedReason::NoEligibleActivities);
        }
        Ok(())
    }

    pub fn score_source<'a>(&'a self, screen: &'a ScreenData) -> ScoreSource<'a> {
        ScoreSource::resolve(self.config.resolve_mode(), screen, &self.score_records)
    }

    pub fn summary_rows(&self, screen: &ScreenData) -> Vec<SummaryRow> {
        build_rows(self.score_source(screen), &self.instances)
    }

    pub fn submit<B>(&self, screen: &ScreenData, bus: &mut B) -> AggregateResult
    where
        B: ReportingBus + ?Sized,
    {
        aggregate_and_emit(
            self.score_source(screen),
            &self.instances,
            &self.config,
            bus,
        )
    }
}

fn check_score(score: f64, max_score: f64) -> Result<(), SessionError> {
    let valid = |v: f64| v.is_finite() && v >= 0.0;

    if valid(score) && valid(max_score) {
        Ok(())
    } else {
        Err(SessionError::InvalidScore { score, max_score })
    }
}
