use axum::extract::State;
use axum::Json;

use super::assignments_json;
use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct SwapBody {
    pub user_a: String,
    pub user_b: String,
}

/// POST /swap — two users trade their assigned dates.
pub async fn swap(
    State(app): State<AppState>,
    Json(body): Json<SwapBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut svc = app.service.lock().await;
    let schedule = svc.swap(&body.user_a, &body.user_b)?;
    Ok(Json(assignments_json(schedule.entries())))
}
