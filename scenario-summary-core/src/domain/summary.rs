use crate::config::ScoringMode;
use crate::domain::eligibility::is_eligible;
use crate::domain::{ActivityInstance, ScoreRecord, ScreenData};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One line of the summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub title: String,
    pub score: f64,
    pub max_score: f64,
}

impl SummaryRow {
    pub fn new(title: impl Into<String>, score: f64, max_score: f64) -> Self {
        Self {
            title: title.into(),
            score,
            max_score,
        }
    }
}

/// Where the scores come from, depending on the scoring mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreSource<'a> {
    Static(&'a ScreenData),
    Dynamic(&'a [ScoreRecord]),
}

impl<'a> ScoreSource<'a> {
    pub fn resolve(mode: ScoringMode, screen: &'a ScreenData, records: &'a [ScoreRecord]) -> Self {
        match mode {
            ScoringMode::Static => ScoreSource::Static(screen),
            ScoringMode::Dynamic => ScoreSource::Dynamic(records),
        }
    }
}

/// Find the single instance a record belongs to
///
/// A missing or ambiguous match is a broken record; it is logged and the
/// record is dropped.
pub fn resolve_instance<'a>(
    record: &ScoreRecord,
    instances: &'a [ActivityInstance],
) -> Option<&'a ActivityInstance> {
    let mut matches = instances
        .iter()
        .filter(|i| i.sub_content_id == record.sub_content_id);

    let Some(instance) = matches.next() else {
        tracing::warn!(
            "⚠️  No instance for score record {}, skipping",
            record.sub_content_id
        );
        return None;
    };

    if matches.next().is_some() {
        tracing::warn!(
            "⚠️  Several instances share sub-content {}, skipping",
            record.sub_content_id
        );
        return None;
    }

    Some(instance)
}

/// The instance a record counts for, if the record counts at all
///
/// Shared by the summary table and the aggregation so the two never
/// disagree on which records are in.
pub fn retained_instance<'a>(
    record: &ScoreRecord,
    instances: &'a [ActivityInstance],
) -> Option<&'a ActivityInstance> {
    if record.is_unscored() {
        tracing::debug!("Skipping unscored record {}", record.sub_content_id);
        return None;
    }

    let instance = resolve_instance(record, instances)?;

    if !is_eligible(instance) {
        tracing::debug!(
            "Skipping read-only activity {} ({})",
            record.sub_content_id,
            instance.content_type()
        );
        return None;
    }

    Some(instance)
}

/// Rows shown in the summary dialog, in visit order
pub fn build_rows(source: ScoreSource<'_>, instances: &[ActivityInstance]) -> Vec<SummaryRow> {
    match source {
        ScoreSource::Static(screen) => vec![SummaryRow::new(
            screen.end_screen_text.clone(),
            screen.score,
            screen.max_score,
        )],
        ScoreSource::Dynamic(records) => records
            .iter()
            .filter_map(|record| {
                let instance = retained_instance(record, instances)?;
                let title = record
                    .title
                    .clone()
                    .unwrap_or_else(|| instance.display_title().to_string());

                Some(SummaryRow::new(title, record.score, record.max_score))
            })
            .collect(),
    }
}
