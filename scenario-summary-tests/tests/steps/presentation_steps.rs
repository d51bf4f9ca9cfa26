use cucumber::{given, then, when};
use scenario_summary_core::{
    ActivityInstance, ScoreRecord, ScoringConfig, ScoringMode, ScreenData, SessionCommand,
    SessionEvent,
};
use scenario_summary_tests::SummaryWorld;
use uuid::Uuid;

// ===== Given Steps =====

#[given(expr = "a presentation with {word} scoring")]
async fn presentation_with_scoring(world: &mut SummaryWorld, mode: String) {
    let mode = match mode.as_str() {
        "static" => ScoringMode::Static,
        "dynamic" => ScoringMode::Dynamic,
        other => panic!("Unknown scoring mode '{}'", other),
    };
    world.reconfigure(ScoringConfig::new(mode));
}

#[given(expr = "a presentation with scoring option {string}")]
async fn presentation_with_scoring_option(world: &mut SummaryWorld, option: String) {
    let config = ScoringConfig::from_scoring_option(&option).expect("Invalid scoring option");
    world.reconfigure(config);
}

#[given("interaction scores are excluded")]
async fn interaction_scores_excluded(world: &mut SummaryWorld) {
    let config = world.config().with_exclude_interaction_scores(true);
    world.reconfigure(config);
}

#[given(expr = "an activity {string} of type {string}")]
async fn activity_of_type(world: &mut SummaryWorld, title: String, machine_name: String) {
    world.register(ActivityInstance::new(Uuid::new_v4(), &machine_name).with_title(title));
}

#[given(expr = "an activity {string} of type {string} that declares itself a task")]
async fn activity_declared_task(world: &mut SummaryWorld, title: String, machine_name: String) {
    world.register(
        ActivityInstance::new(Uuid::new_v4(), &machine_name)
            .with_title(title)
            .with_declared_task(true),
    );
}

#[given(expr = "an activity {string} of type {string} that declares itself not a task")]
async fn activity_declared_not_task(
    world: &mut SummaryWorld,
    title: String,
    machine_name: String,
) {
    world.register(
        ActivityInstance::new(Uuid::new_v4(), &machine_name)
            .with_title(title)
            .with_declared_task(false),
    );
}

#[given(expr = "an activity {string} of type {string} reporting its own score {float} of {float}")]
async fn activity_with_own_score(
    world: &mut SummaryWorld,
    title: String,
    machine_name: String,
    score: f64,
    max_score: f64,
) {
    world.register(
        ActivityInstance::new(Uuid::new_v4(), &machine_name)
            .with_title(title)
            .with_declared_task(true)
            .with_own_score(score, max_score),
    );
}

#[given(expr = "{string} scored {float} of {float}")]
async fn activity_scored(world: &mut SummaryWorld, title: String, score: f64, max_score: f64) {
    let id = world.activity_id(&title);
    world.execute(SessionCommand::RecordScore {
        record: ScoreRecord::new(id, score, max_score),
    });
}

#[given(expr = "{string} now reports its own score {float} of {float}")]
async fn activity_reports_own_score(
    world: &mut SummaryWorld,
    title: String,
    score: f64,
    max_score: f64,
) {
    let sub_content_id = world.activity_id(&title);
    world.execute(SessionCommand::UpdateInstanceScore {
        sub_content_id,
        score,
        max_score,
    });
}

#[given(expr = "an unregistered activity scored {float} of {float}")]
async fn unregistered_activity_scored(world: &mut SummaryWorld, score: f64, max_score: f64) {
    world.execute(SessionCommand::RecordScore {
        record: ScoreRecord::new(Uuid::new_v4(), score, max_score),
    });
}

// ===== When Steps =====

#[when(expr = "the presentation reaches the end screen {string}")]
async fn reaches_end_screen(world: &mut SummaryWorld, text: String) {
    world.execute(SessionCommand::CompletePresentation {
        screen: ScreenData::end_screen(text, 0.0, 0.0),
    });
}

#[when(expr = "the presentation reaches the end screen {string} with score {float} of {float}")]
async fn reaches_scored_end_screen(
    world: &mut SummaryWorld,
    text: String,
    score: f64,
    max_score: f64,
) {
    world.execute(SessionCommand::CompletePresentation {
        screen: ScreenData::end_screen(text, score, max_score),
    });
}

#[when(expr = "{string} scores {float} of {float}")]
async fn activity_scores(world: &mut SummaryWorld, title: String, score: f64, max_score: f64) {
    let id = world.activity_id(&title);
    world.execute(SessionCommand::RecordScore {
        record: ScoreRecord::new(id, score, max_score),
    });
}

#[when("the presentation shows its start screen")]
async fn shows_start_screen(world: &mut SummaryWorld) {
    world.execute(SessionCommand::CompletePresentation {
        screen: ScreenData::start_screen(),
    });
}

// ===== Then Steps =====

#[then("the summary is offered")]
async fn summary_offered(world: &mut SummaryWorld) {
    assert_eq!(world.last_event(), &SessionEvent::SummaryOffered);
    assert!(world.session.is_summary_offered());
}

#[then("no summary is offered")]
async fn no_summary_offered(world: &mut SummaryWorld) {
    assert!(
        matches!(world.last_event(), SessionEvent::SummaryNotOffered { .. }),
        "Expected SummaryNotOffered, got {:?}",
        world.last_event()
    );
    assert!(!world.session.is_summary_offered());
}

#[then(expr = "no summary is offered because of {string}")]
async fn no_summary_offered_because(world: &mut SummaryWorld, reason: String) {
    match world.last_event() {
        SessionEvent::SummaryNotOffered { reason: actual } => {
            assert_eq!(actual.to_string(), reason);
        }
        other => panic!("Expected SummaryNotOffered, got {:?}", other),
    }
}
