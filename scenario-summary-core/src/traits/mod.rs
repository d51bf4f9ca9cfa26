mod content;
mod reporting;

pub use content::ContentCapabilities;
pub use reporting::{ReportingBus, SummaryRenderer};
