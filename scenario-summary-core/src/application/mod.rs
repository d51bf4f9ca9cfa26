mod commands;
mod event_loop;
mod events;

pub use commands::SessionCommand;
pub use event_loop::{SummarySession, SummaryState};
pub use events::SessionEvent;
