use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::dto::{EntriesResponse, SubmitEntryRequest, SubmitEntryResponse, MAX_TAGS, MAX_TAG_LEN};
use crate::error::{AppError, AppJson, AppResult};
use crate::handlers::dashboard::build_dashboard;
use crate::models::mood::{MoodEntry, MoodEntryView};
use crate::services::aggregate::RequestContext;
use crate::AppState;

const SAVED_MESSAGE: &str = "Your mood has been logged. Great job checking in! 💖";

pub async fn submit_entry(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    AppJson(body): AppJson<SubmitEntryRequest>,
) -> AppResult<(StatusCode, Json<SubmitEntryResponse>)> {
    body.validate()?;
    let (mood, entry_text, tags) = body.into_parts();

    if state.config.require_entry_text && entry_text.trim().is_empty() {
        return Err(AppError::Validation("Journal entry is required".into()));
    }

    if tags.len() > MAX_TAGS {
        return Err(AppError::Validation(format!(
            "At most {MAX_TAGS} tags are allowed"
        )));
    }
    if tags.iter().any(|t| t.chars().count() > MAX_TAG_LEN) {
        return Err(AppError::Validation(format!(
            "Tags must be at most {MAX_TAG_LEN} characters"
        )));
    }

    let entry = MoodEntry::new(
        auth_user.id.clone(),
        Utc::now(),
        mood,
        entry_text,
        tags,
    );

    let submission_advice = state
        .aggregator
        .advice_engine()
        .advise(&entry.entry_text, &entry.tags);

    state.store.append(&entry).await?;

    tracing::info!(
        user_id = %auth_user.id,
        entry_id = %entry.id,
        score = entry.score(),
        tags = entry.tags.len(),
        "Mood entry logged"
    );

    let ctx = RequestContext::new(auth_user.id).with_submission(entry.clone());
    let dashboard = build_dashboard(&state, &ctx).await;

    Ok((
        StatusCode::CREATED,
        Json(SubmitEntryResponse {
            message: SAVED_MESSAGE,
            entry: MoodEntryView::from(&entry),
            submission_advice,
            dashboard,
        }),
    ))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<EntriesResponse>> {
    let entries: Vec<MoodEntryView> = state
        .store
        .list_ordered(&auth_user.id)
        .await?
        .iter()
        .map(MoodEntryView::from)
        .collect();

    Ok(Json(EntriesResponse {
        total: entries.len(),
        entries,
    }))
}
