use crate::domain::{AggregateResult, NotOfferedReason, SubContentId, SummaryRow};

/// Events emitted by the session after each command
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Sub-activity was registered
    InstanceRegistered { sub_content_id: SubContentId },

    /// Score was recorded
    ScoreRecorded { sub_content_id: SubContentId },

    /// Instance's own score was refreshed
    InstanceScoreUpdated { sub_content_id: SubContentId },

    /// Summary can now be opened
    SummaryOffered,

    /// Presentation completed without a summary
    SummaryNotOffered { reason: NotOfferedReason },

    /// Summary rows were handed to the renderer
    SummaryShown { rows: Vec<SummaryRow> },

    /// Dialog dismissed, nothing emitted
    SummaryCancelled,

    /// Scores went out to the reporting bus
    ScoresSubmitted { result: AggregateResult },

    /// Command failed
    CommandFailed { command: String, reason: String },
}
