use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::advice::{AdviceEngine, Suggestion};
use super::reflection::{reflect, ToneSummary};
use super::sentiment::{LexiconScorer, PolarityScorer};
use crate::models::mood::{Mood, MoodEntry, MoodEntryView};

/// Request-scoped state handed to the aggregator in place of a session.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user_id: String,
    pub just_submitted: Option<MoodEntry>,
}

impl RequestContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            just_submitted: None,
        }
    }

    pub fn with_submission(mut self, entry: MoodEntry) -> Self {
        self.just_submitted = Some(entry);
        self
    }
}

/// One chart point. Same-day entries stay separate points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodPoint {
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
    pub score: i32,
    pub mood: Mood,
}

#[derive(Debug, Clone, Default)]
pub struct MoodAggregate<'a> {
    pub series: Vec<MoodPoint>,
    pub latest_entry: Option<&'a MoodEntry>,
}

/// Builds the chart series and picks the most recent entry.
///
/// The log is not trusted to be ordered: the series is sorted by timestamp
/// (stable, so ties keep log order) and the latest entry is the one with the
/// greatest timestamp, the later element winning a tie.
pub fn aggregate(log: &[MoodEntry]) -> MoodAggregate<'_> {
    let mut ordered: Vec<&MoodEntry> = log.iter().collect();
    ordered.sort_by_key(|e| e.timestamp);

    let series = ordered
        .iter()
        .map(|e| MoodPoint {
            date: e.date(),
            timestamp: e.timestamp,
            score: e.score(),
            mood: e.mood,
        })
        .collect();

    MoodAggregate {
        series,
        latest_entry: log.iter().max_by_key(|e| e.timestamp),
    }
}

/// Everything the presentation layer needs for the trends view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dashboard {
    pub series: Vec<MoodPoint>,
    pub latest_entry: Option<MoodEntryView>,
    pub reflection: Option<&'static str>,
    pub tone: Option<ToneSummary>,
    pub advice: Vec<Suggestion>,
    pub latest_is_submission: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl Dashboard {
    /// Empty dashboard carrying a message for the user, used when the log
    /// cannot be read.
    pub fn unavailable(notice: impl Into<String>) -> Self {
        Self {
            notice: Some(notice.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Aggregator<S = LexiconScorer> {
    advice: AdviceEngine<S>,
}

impl Aggregator<LexiconScorer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: PolarityScorer> Aggregator<S> {
    pub fn advice_engine(&self) -> &AdviceEngine<S> {
        &self.advice
    }

    /// Derives the dashboard from the stored log. Reflection, tone and advice
    /// all describe the latest stored entry, which is not necessarily the
    /// one submitted in this request.
    pub fn summarize(&self, ctx: &RequestContext, log: &[MoodEntry]) -> Dashboard {
        let MoodAggregate {
            series,
            latest_entry,
        } = aggregate(log);

        let Some(latest) = latest_entry else {
            tracing::debug!(user_id = %ctx.user_id, "No mood entries yet");
            return Dashboard::default();
        };

        let tone = (!latest.entry_text.trim().is_empty())
            .then(|| ToneSummary::new(self.advice.polarity(&latest.entry_text)));

        let latest_is_submission = ctx
            .just_submitted
            .as_ref()
            .is_some_and(|submitted| submitted.id == latest.id);

        if ctx.just_submitted.is_some() && !latest_is_submission {
            tracing::info!(
                user_id = %ctx.user_id,
                latest_id = %latest.id,
                "Stored log has a later entry than the one just submitted"
            );
        }

        Dashboard {
            series,
            latest_entry: Some(MoodEntryView::from(latest)),
            reflection: Some(reflect(latest.score())),
            tone,
            advice: self.advice.advise(&latest.entry_text, &latest.tags),
            latest_is_submission,
            notice: None,
        }
    }
}
