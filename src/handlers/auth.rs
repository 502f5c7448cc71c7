use axum::{extract::State, Json};
use uuid::Uuid;

use crate::auth::jwt::{create_access_token, AccessToken};
use crate::error::AppResult;
use crate::AppState;

/// Issues a token for a fresh user id. Keeping the token is what keeps the
/// mood log; there is no account behind it.
pub async fn guest(State(state): State<AppState>) -> AppResult<Json<AccessToken>> {
    let user_id = Uuid::new_v4().to_string();
    let token = create_access_token(&user_id, &state.config)?;
    tracing::info!(user_id = %user_id, "Guest session issued");
    Ok(Json(token))
}
