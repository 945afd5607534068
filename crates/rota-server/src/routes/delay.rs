use axum::extract::State;
use axum::Json;

use super::assignments_json;
use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct DelayBody {
    /// Days to push forward. Bounded by the gap to the following
    /// assignment unless `all` is set.
    #[serde(default = "default_days")]
    pub days: u32,
    /// Delay every upcoming assignment instead of only the next one.
    #[serde(default)]
    pub all: bool,
}

fn default_days() -> u32 {
    1
}

/// POST /delay — delay the next assignment, or all upcoming ones.
pub async fn delay(
    State(app): State<AppState>,
    Json(body): Json<DelayBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut svc = app.service.lock().await;
    let schedule = svc.delay(body.all, body.days)?;
    Ok(Json(assignments_json(schedule.entries())))
}
