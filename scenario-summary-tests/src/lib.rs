use cucumber::World;
use scenario_summary_core::{
    ActivityInstance, Presentation, ReportEvent, ScoringConfig, SessionCommand, SessionEvent,
    SummaryRenderer, SummaryRow, SummarySession,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Stands in for the dialog: remembers every row set it was asked to show
#[derive(Debug, Default)]
pub struct RecordedDialog {
    pub shown: Vec<Vec<SummaryRow>>,
}

impl SummaryRenderer for RecordedDialog {
    fn show_summary(&mut self, rows: &[SummaryRow]) {
        self.shown.push(rows.to_vec());
    }
}

pub type TestSession = SummarySession<Vec<ReportEvent>, RecordedDialog>;

#[derive(Debug, World)]
pub struct SummaryWorld {
    /// Summary session (the system under test)
    pub session: TestSession,

    /// Last command executed (for debugging)
    pub last_command: Option<SessionCommand>,

    /// Last event emitted (for assertions)
    pub last_event: Option<SessionEvent>,

    /// Track sub-content IDs by activity title
    pub activity_ids: HashMap<String, Uuid>,
}

impl Default for SummaryWorld {
    fn default() -> Self {
        Self::with_config(ScoringConfig::default())
    }
}

impl SummaryWorld {
    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            session: SummarySession::new(
                Presentation::new(config),
                Vec::new(),
                RecordedDialog::default(),
            ),
            last_command: None,
            last_event: None,
            activity_ids: HashMap::new(),
        }
    }

    /// Replace the session with a fresh one using `config`
    pub fn reconfigure(&mut self, config: ScoringConfig) {
        *self = Self::with_config(config);
    }

    /// Current configuration of the presentation
    pub fn config(&self) -> ScoringConfig {
        self.session.presentation().config().clone()
    }

    /// Execute a command and store the result
    pub fn execute(&mut self, command: SessionCommand) -> &SessionEvent {
        self.last_command = Some(command.clone());
        let event = self.session.handle_command(command);
        self.last_event.insert(event)
    }

    /// Get the last event (panics if none)
    pub fn last_event(&self) -> &SessionEvent {
        self.last_event.as_ref().expect("No event executed yet")
    }

    /// Register an activity under its title
    pub fn register(&mut self, instance: ActivityInstance) {
        let title = instance.display_title().to_string();
        self.activity_ids.insert(title, instance.sub_content_id);
        self.execute(SessionCommand::RegisterInstance { instance });
    }

    /// Get sub-content ID by activity title
    pub fn activity_id(&self, title: &str) -> Uuid {
        *self
            .activity_ids
            .get(title)
            .unwrap_or_else(|| panic!("Activity '{}' not found", title))
    }

    /// Events sent to the reporting bus so far
    pub fn reported(&self) -> &[ReportEvent] {
        self.session.bus()
    }

    /// Rows of the most recently shown summary
    pub fn last_rows(&self) -> &[SummaryRow] {
        self.session
            .renderer()
            .shown
            .last()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
