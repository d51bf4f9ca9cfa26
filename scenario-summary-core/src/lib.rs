pub mod application;
pub mod config;
pub mod domain;
pub mod traits;

pub use application::{SessionCommand, SessionEvent, SummarySession, SummaryState};
pub use config::{ConfigError, ScoringConfig, ScoringMode};
pub use domain::{
    ActivityInstance, AggregateResult, ContentType, NotOfferedReason, Presentation, ReportEvent,
    ScoreRecord, ScreenData, SessionError, SubContentId, SummaryRow,
};
pub use traits::{ContentCapabilities, ReportingBus, SummaryRenderer};
