use cucumber::{then, when};
use scenario_summary_core::{ReportEvent, SessionCommand, SessionEvent, SummaryRow};
use scenario_summary_tests::SummaryWorld;

fn answered_for<'a>(world: &'a SummaryWorld, title: &str) -> &'a ReportEvent {
    let id = world.activity_id(title);
    world
        .reported()
        .iter()
        .find(|e| matches!(e, ReportEvent::Answered { sub_content_id: Some(sid), .. } if *sid == id))
        .unwrap_or_else(|| panic!("No answered event for '{}'", title))
}

// ===== When Steps =====

#[when("the learner opens the summary")]
async fn open_summary(world: &mut SummaryWorld) {
    world.execute(SessionCommand::OpenSummary);
}

#[when("the learner confirms the summary")]
async fn confirm_summary(world: &mut SummaryWorld) {
    world.execute(SessionCommand::ConfirmSummary);
}

#[when("the learner cancels the summary")]
async fn cancel_summary(world: &mut SummaryWorld) {
    world.execute(SessionCommand::CancelSummary);
}

#[when("the learner submits the summary")]
async fn submit_summary(world: &mut SummaryWorld) {
    world.execute(SessionCommand::OpenSummary);
    world.execute(SessionCommand::ConfirmSummary);
}

// ===== Then Steps =====

#[then(expr = "the summary shows {int} rows")]
async fn summary_row_count(world: &mut SummaryWorld, count: usize) {
    assert_eq!(world.last_rows().len(), count);
}

#[then(expr = "summary row {int} is {string} with {float} of {float}")]
async fn summary_row_is(
    world: &mut SummaryWorld,
    index: usize,
    title: String,
    score: f64,
    max_score: f64,
) {
    let row = world
        .last_rows()
        .get(index - 1)
        .unwrap_or_else(|| panic!("No summary row {}", index));
    assert_eq!(row, &SummaryRow::new(title, score, max_score));
}

#[then(expr = "the final score is {float} of {float}")]
async fn final_score(world: &mut SummaryWorld, raw: f64, max: f64) {
    match world.last_event() {
        SessionEvent::ScoresSubmitted { result } => {
            assert_eq!(result.raw_score(), raw);
            assert_eq!(result.max_score(), max);
        }
        other => panic!("Expected ScoresSubmitted, got {:?}", other),
    }

    match world.reported().last() {
        Some(ReportEvent::Scored {
            raw: sent_raw,
            max: sent_max,
            ..
        }) => {
            assert_eq!(*sent_raw, raw);
            assert_eq!(*sent_max, max);
        }
        other => panic!("Expected a final scored event, got {:?}", other),
    }
}

#[then(expr = "{int} scored event is reported")]
async fn scored_event_count(world: &mut SummaryWorld, count: usize) {
    let scored = world.reported().iter().filter(|e| e.is_scored()).count();
    assert_eq!(scored, count);
}

#[then(expr = "{int} events are reported")]
async fn reported_count(world: &mut SummaryWorld, count: usize) {
    assert_eq!(world.reported().len(), count);
}

#[then("nothing is reported")]
async fn nothing_reported(world: &mut SummaryWorld) {
    assert!(world.reported().is_empty());
}

#[then(expr = "the end screen is reported with response {string}")]
async fn end_screen_reported(world: &mut SummaryWorld, response: String) {
    let found = world.reported().iter().any(|e| {
        matches!(
            e,
            ReportEvent::Answered { sub_content_id: None, response: Some(r), .. } if *r == response
        )
    });
    assert!(found, "No end screen event with response '{}'", response);
}

#[then(expr = "the answered event for {string} reports {float} of {float}")]
async fn answered_reports(world: &mut SummaryWorld, title: String, raw: f64, max: f64) {
    match answered_for(world, &title) {
        ReportEvent::Answered { score, .. } => {
            assert_eq!(score.raw, raw);
            assert_eq!(score.max, max);
            assert_eq!(score.min, 0.0);
        }
        other => panic!("Expected Answered, got {:?}", other),
    }
}

#[then(expr = "the answered event for {string} has scaled score {float}")]
async fn answered_scaled(world: &mut SummaryWorld, title: String, scaled: f64) {
    match answered_for(world, &title) {
        ReportEvent::Answered { score, .. } => assert_eq!(score.scaled, Some(scaled)),
        other => panic!("Expected Answered, got {:?}", other),
    }
}

#[then(expr = "the answered event for {string} has no scaled score")]
async fn answered_not_scaled(world: &mut SummaryWorld, title: String) {
    match answered_for(world, &title) {
        ReportEvent::Answered { score, .. } => assert_eq!(score.scaled, None),
        other => panic!("Expected Answered, got {:?}", other),
    }
}

#[then(expr = "the answered event for {string} has response {string}")]
async fn answered_response(world: &mut SummaryWorld, title: String, expected: String) {
    match answered_for(world, &title) {
        ReportEvent::Answered { response, .. } => {
            assert_eq!(response.as_deref(), Some(expected.as_str()))
        }
        other => panic!("Expected Answered, got {:?}", other),
    }
}

#[then("the summary is cancelled and can be reopened")]
async fn summary_cancelled(world: &mut SummaryWorld) {
    assert_eq!(world.last_event(), &SessionEvent::SummaryCancelled);
    assert!(world.session.is_summary_offered());
}

#[then(expr = "the command fails with {string}")]
async fn command_fails(world: &mut SummaryWorld, expected: String) {
    match world.last_event() {
        SessionEvent::CommandFailed { reason, .. } => {
            assert!(
                reason.contains(&expected),
                "Expected '{}' in '{}'",
                expected,
                reason
            );
        }
        other => panic!("Expected CommandFailed, got {:?}", other),
    }
}
