use crate::domain::{ActivityInstance, ScoreRecord, ScreenData, SubContentId};

/// Commands the host sends to the summary session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Register a sub-activity of the presentation
    RegisterInstance { instance: ActivityInstance },

    /// A visited activity produced a score (dynamic scoring)
    RecordScore { record: ScoreRecord },

    /// A content's own score changed (read when interaction scores are excluded)
    UpdateInstanceScore {
        sub_content_id: SubContentId,
        score: f64,
        max_score: f64,
    },

    /// The scenario reached a screen that may close it
    CompletePresentation { screen: ScreenData },

    /// User asked to see the summary
    OpenSummary,

    /// User confirmed the summary dialog
    ConfirmSummary,

    /// User dismissed the summary dialog
    CancelSummary,
}

impl SessionCommand {
    /// Short name used in failure events
    pub fn name(&self) -> &'static str {
        match self {
            SessionCommand::RegisterInstance { .. } => "RegisterInstance",
            SessionCommand::RecordScore { .. } => "RecordScore",
            SessionCommand::UpdateInstanceScore { .. } => "UpdateInstanceScore",
            SessionCommand::CompletePresentation { .. } => "CompletePresentation",
            SessionCommand::OpenSummary => "OpenSummary",
            SessionCommand::ConfirmSummary => "ConfirmSummary",
            SessionCommand::CancelSummary => "CancelSummary",
        }
    }
}
