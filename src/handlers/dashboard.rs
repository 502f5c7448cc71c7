use axum::{extract::State, Extension, Json};

use crate::auth::middleware::AuthUser;
use crate::services::aggregate::{Dashboard, RequestContext};
use crate::AppState;

pub const HISTORY_UNAVAILABLE: &str =
    "Your mood history couldn't be loaded right now. Please try again shortly.";

pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Json<Dashboard> {
    let ctx = RequestContext::new(auth_user.id);
    Json(build_dashboard(&state, &ctx).await)
}

/// Reads the user's log and summarizes it. A failed read degrades to an
/// empty dashboard with a notice rather than an error.
pub async fn build_dashboard(state: &AppState, ctx: &RequestContext) -> Dashboard {
    match state.store.list_ordered(&ctx.user_id).await {
        Ok(log) => state.aggregator.summarize(ctx, &log),
        Err(e) => {
            tracing::warn!(user_id = %ctx.user_id, error = %e, "Mood log read failed");
            Dashboard::unavailable(HISTORY_UNAVAILABLE)
        }
    }
}
