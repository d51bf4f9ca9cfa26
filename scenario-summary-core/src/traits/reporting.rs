use crate::domain::{ReportEvent, SummaryRow};

/// Host-owned sink for scoring events
///
/// Fire-and-forget: the core never waits for delivery.
pub trait ReportingBus {
    fn emit(&mut self, event: ReportEvent);
}

impl ReportingBus for Vec<ReportEvent> {
    fn emit(&mut self, event: ReportEvent) {
        self.push(event);
    }
}

impl<B: ReportingBus + ?Sized> ReportingBus for &mut B {
    fn emit(&mut self, event: ReportEvent) {
        (**self).emit(event);
    }
}

/// Shows the summary dialog
///
/// The host answers with a confirm or cancel command once the user decides.
pub trait SummaryRenderer {
    fn show_summary(&mut self, rows: &[SummaryRow]);
}

impl<F: FnMut(&[SummaryRow])> SummaryRenderer for F {
    fn show_summary(&mut self, rows: &[SummaryRow]) {
        self(rows)
    }
}
