use crate::config::ScoringConfig;
use crate::domain::summary::{retained_instance, ScoreSource};
use crate::domain::{ActivityInstance, ReportEvent, ScoreBlock, ScoreRecord, ScoredReason};
use crate::traits::ReportingBus;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Response label attached to per-activity events
pub const SCENARIO_SCORE_RESPONSE: &str = "Scenario Score";

/// Final score of the presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    raw_score: f64,
    max_score: f64,
}

impl AggregateResult {
    /// Build from summed totals; a zero max becomes 1 so the ratio stays defined
    pub fn new(raw_score: f64, max_score: f64) -> Self {
        let max_score = if max_score == 0.0 { 1.0 } else { max_score };

        Self {
            raw_score,
            max_score,
        }
    }

    pub fn raw_score(&self) -> f64 {
        self.raw_score
    }

    pub fn max_score(&self) -> f64 {
        self.max_score
    }
}

impl<'de> Deserialize<'de> for AggregateResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Totals {
            raw_score: f64,
            max_score: f64,
        }

        let totals = Totals::deserialize(deserializer)?;
        Ok(AggregateResult::new(totals.raw_score, totals.max_score))
    }
}

/// Sum the scores, emit the per-activity events, then the final "scored" event
///
/// Nothing is kept between calls: every confirmation runs a fresh fold.
pub fn aggregate_and_emit<B>(
    source: ScoreSource<'_>,
    instances: &[ActivityInstance],
    config: &ScoringConfig,
    bus: &mut B,
) -> AggregateResult
where
    B: ReportingBus + ?Sized,
{
    let (raw, max) = match source {
        ScoreSource::Static(screen) => {
            bus.emit(ReportEvent::Answered {
                sub_content_id: None,
                score: ScoreBlock::new(screen.score, screen.max_score),
                response: Some(screen.end_screen_text.clone()),
            });
            (screen.score, screen.max_score)
        }
        ScoreSource::Dynamic(records) => {
            let mut raw = 0.0;
            let mut max = 0.0;

            for record in records {
                let Some(instance) = retained_instance(record, instances) else {
                    continue;
                };

                bus.emit(activity_event(record, instance, config));

                raw += record.score;
                max += record.max_score;
            }

            (raw, max)
        }
    };

    let result = AggregateResult::new(raw, max);

    tracing::info!(
        "🏁 Submitting scenario score {}/{}",
        result.raw_score(),
        result.max_score()
    );

    bus.emit(ReportEvent::Scored {
        raw: result.raw_score(),
        max: result.max_score(),
        reason: ScoredReason::Submitted,
    });

    result
}

fn activity_event(
    record: &ScoreRecord,
    instance: &ActivityInstance,
    config: &ScoringConfig,
) -> ReportEvent {
    if instance.content_type().is_branching_question() {
        return ReportEvent::Answered {
            sub_content_id: Some(record.sub_content_id),
            score: ScoreBlock::new(record.score, record.max_score).with_scaled(),
            response: None,
        };
    }

    let (mut raw, mut max) = (record.score, record.max_score);

    if config.exclude_interaction_scores {
        if let Some(own) = instance.score {
            raw = (raw - own).max(0.0);
        }
        if let Some(own_max) = instance.max_score {
            max = (max - own_max).max(0.0);
        }
    }

    ReportEvent::Answered {
        sub_content_id: Some(record.sub_content_id),
        score: ScoreBlock::new(raw, max),
        response: Some(SCENARIO_SCORE_RESPONSE.to_string()),
    }
}
