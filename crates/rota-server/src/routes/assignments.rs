use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::assignments_json;
use crate::error::AppError;
use crate::state::AppState;

/// GET / — all assignments, ordered by date.
pub async fn list(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let mut svc = app.service.lock().await;
    let schedule = svc.list()?;
    Ok(Json(assignments_json(schedule.entries())))
}

/// GET /users/{username} — the assignment held by one user.
pub async fn get_user(
    State(app): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut svc = app.service.lock().await;
    let assignment = svc.get(&username)?;
    Ok(Json(assignments_json(&[assignment])))
}

/// PUT /users/{username} — append a user to the rotation.
pub async fn add_user(
    State(app): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut svc = app.service.lock().await;
    let schedule = svc.add_user(&username)?;
    Ok(Json(assignments_json(schedule.entries())))
}

/// DELETE /users/{username} — remove a user, re-aligning the dates of
/// the remaining users.
pub async fn delete_user(
    State(app): State<AppState>,
    Path(username): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut svc = app.service.lock().await;
    svc.remove_user(&username)?;
    Ok(StatusCode::OK)
}

/// POST /new — start a new rotation: dates reset from today's anchor,
/// user order kept.
pub async fn regenerate(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let mut svc = app.service.lock().await;
    let schedule = svc.regenerate()?;
    Ok(Json(assignments_json(schedule.entries())))
}
