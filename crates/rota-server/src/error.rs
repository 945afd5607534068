use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rota_core::RotaError;

/// Private sentinel error type used to carry an explicit HTTP 400
/// through the `anyhow::Error` chain without touching `RotaError`.
#[derive(Debug)]
struct BadRequestError(String);

impl std::fmt::Display for BadRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BadRequestError {}

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 400 Bad Request error with the given message.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(BadRequestError(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(b) = self.0.downcast_ref::<BadRequestError>() {
            let body = serde_json::json!({ "error": b.0.clone() });
            return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
        }

        let status = if let Some(e) = self.0.downcast_ref::<RotaError>() {
            match e {
                RotaError::UserNotFound(_) => StatusCode::NOT_FOUND,
                RotaError::UserExists(_) => StatusCode::CONFLICT,
                RotaError::InvalidUsername(_)
                | RotaError::InvalidDelay { .. }
                | RotaError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
                RotaError::NoUpcomingAssignment => StatusCode::UNPROCESSABLE_ENTITY,
                RotaError::Io(_) | RotaError::Json(_) | RotaError::Yaml(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
