pub mod activity;
pub mod aggregate;
pub mod catalog;
pub mod eligibility;
pub mod events;
pub mod presentation;
pub mod summary;

pub use activity::{ActivityInstance, ScoreRecord, ScreenData, SubContentId};
pub use aggregate::{aggregate_and_emit, AggregateResult, SCENARIO_SCORE_RESPONSE};
pub use catalog::{ContentType, Library};
pub use eligibility::{has_eligible_activity, is_eligible, is_task};
pub use events::{ReportEvent, ScoreBlock, ScoredReason};
pub use presentation::{NotOfferedReason, Presentation, SessionError};
pub use summary::{build_rows, retained_instance, ScoreSource, SummaryRow};
