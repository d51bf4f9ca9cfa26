use crate::application::{SessionCommand, SessionEvent};
use crate::domain::{
    ActivityInstance, Presentation, ScoreRecord, ScreenData, SessionError, SubContentId,
};
use crate::traits::{ReportingBus, SummaryRenderer};

/// Where the presentation is in the summary flow
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryState {
    /// No summary available
    Idle,
    /// Summary can be opened for this end screen
    Offered { screen: ScreenData },
    /// Summary dialog is open
    Shown { screen: ScreenData },
}

/// Summary session that processes commands and emits events
///
/// Owns the presentation, the reporting bus and the renderer. Scores only
/// reach the bus on `ConfirmSummary`.
#[derive(Debug)]
pub struct SummarySession<B, R> {
    presentation: Presentation,
    state: SummaryState,
    bus: B,
    renderer: R,
}

impl<B, R> SummarySession<B, R>
where
    B: ReportingBus,
    R: SummaryRenderer,
{
    pub fn new(presentation: Presentation, bus: B, renderer: R) -> Self {
        Self {
            presentation,
            state: SummaryState::Idle,
            bus,
            renderer,
        }
    }

    /// Process a single command and return the resulting event
    pub fn handle_command(&mut self, command: SessionCommand) -> SessionEvent {
        let name = command.name();

        let result = match command {
            SessionCommand::RegisterInstance { instance } => self.handle_register(instance),
            SessionCommand::RecordScore { record } => self.handle_record_score(record),
            SessionCommand::UpdateInstanceScore {
                sub_content_id,
                score,
                max_score,
            } => self.handle_update_instance_score(sub_content_id, score, max_score),
            SessionCommand::CompletePresentation { screen } => self.handle_complete(screen),
            SessionCommand::OpenSummary => self.handle_open(),
            SessionCommand::ConfirmSummary => self.handle_confirm(),
            SessionCommand::CancelSummary => self.handle_cancel(),
        };

        result.unwrap_or_else(|e| {
            tracing::warn!("⚠️  {} failed: {}", name, e);
            SessionEvent::CommandFailed {
                command: name.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// The open dialog must stay in step with what gets submitted
    fn ensure_scores_unlocked(&self) -> Result<(), SessionError> {
        match self.state {
            SummaryState::Shown { .. } => Err(SessionError::ScoresLocked),
            _ => Ok(()),
        }
    }

    fn handle_register(&mut self, instance: ActivityInstance) -> Result<SessionEvent, SessionError> {
        self.ensure_scores_unlocked()?;

        let sub_content_id = instance.sub_content_id;
        self.presentation.register_instance(instance)?;
        Ok(SessionEvent::InstanceRegistered { sub_content_id })
    }

    fn handle_record_score(&mut self, record: ScoreRecord) -> Result<SessionEvent, SessionError> {
        self.ensure_scores_unlocked()?;

        let sub_content_id = record.sub_content_id;
        self.presentation.record_score(record)?;
        Ok(SessionEvent::ScoreRecorded { sub_content_id })
    }

    fn handle_update_instance_score(
        &mut self,
        sub_content_id: SubContentId,
        score: f64,
        max_score: f64,
    ) -> Result<SessionEvent, SessionError> {
        self.ensure_scores_unlocked()?;

        self.presentation
            .update_instance_score(sub_content_id, score, max_score)?;
        Ok(SessionEvent::InstanceScoreUpdated { sub_content_id })
    }

    fn handle_complete(&mut self, screen: ScreenData) -> Result<SessionEvent, SessionError> {
        if matches!(self.state, SummaryState::Shown { .. }) {
            return Err(SessionError::SummaryAlreadyShown);
        }

        match self.presentation.check_summary_offer(&screen) {
            Ok(()) => {
                tracing::info!("📋 Summary offered");
                self.state = SummaryState::Offered { screen };
                Ok(SessionEvent::SummaryOffered)
            }
            Err(reason) => {
                tracing::info!("No summary offered: {}", reason);
                self.state = SummaryState::Idle;
                Ok(SessionEvent::SummaryNotOffered { reason })
            }
        }
    }

    fn handle_open(&mut self) -> Result<SessionEvent, SessionError> {
        let screen = match &self.state {
            SummaryState::Offered { screen } => screen.clone(),
            SummaryState::Shown { .. } => return Err(SessionError::SummaryAlreadyShown),
            SummaryState::Idle => return Err(SessionError::SummaryNotOffered),
        };

        let rows = self.presentation.summary_rows(&screen);
        tracing::info!("📊 Showing summary with {} rows", rows.len());

        self.renderer.show_summary(&rows);
        self.state = SummaryState::Shown { screen };

        Ok(SessionEvent::SummaryShown { rows })
    }

    fn handle_confirm(&mut self) -> Result<SessionEvent, SessionError> {
        let screen = match std::mem::replace(&mut self.state, SummaryState::Idle) {
            SummaryState::Shown { screen } => screen,
            other => {
                self.state = other;
                return Err(SessionError::SummaryNotShown);
            }
        };

        let result = self.presentation.submit(&screen, &mut self.bus);

        Ok(SessionEvent::ScoresSubmitted { result })
    }

    fn handle_cancel(&mut self) -> Result<SessionEvent, SessionError> {
        let screen = match std::mem::replace(&mut self.state, SummaryState::Idle) {
            SummaryState::Shown { screen } => screen,
            other => {
                self.state = other;
                return Err(SessionError::SummaryNotShown);
            }
        };

        tracing::debug!("Summary dialog cancelled");
        self.state = SummaryState::Offered { screen };

        Ok(SessionEvent::SummaryCancelled)
    }

    // ===== Queries =====

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn state(&self) -> &SummaryState {
        &self.state
    }

    pub fn is_summary_offered(&self) -> bool {
        matches!(self.state, SummaryState::Offered { .. })
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
