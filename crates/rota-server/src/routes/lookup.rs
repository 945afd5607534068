use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;

use super::assignments_json;
use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct LookupParams {
    /// Beginning of the period; defaults to today.
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// End of the period; omitted means "just the next assignment".
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

/// GET /lookup?from=&to= — who is assigned during a period.
pub async fn lookup(
    State(app): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut svc = app.service.lock().await;
    let hits = svc.lookup(params.from, params.to)?;
    Ok(Json(assignments_json(&hits)))
}
