use axum::{extract::State, Json};

use crate::dto::{MoodOption, WellnessResponse};
use crate::models::mood::Mood;
use crate::AppState;

const SELF_CARE_CHECKLIST: [&str; 4] = [
    "💧 Drink water",
    "🚶 Take a 10-minute walk",
    "📞 Call a friend",
    "🧘 3-minute breathing",
];

pub async fn list_moods() -> Json<Vec<MoodOption>> {
    Json(Mood::ALL.into_iter().map(MoodOption::from).collect())
}

pub async fn get_wellness(State(state): State<AppState>) -> Json<WellnessResponse> {
    Json(WellnessResponse {
        mindfulness_track_url: state.config.mindfulness_track_url.clone(),
        self_care_checklist: SELF_CARE_CHECKLIST.to_vec(),
    })
}
