use thiserror::Error;

#[derive(Debug, Error)]
pub enum RotaError {
    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("user already exists: {0}")]
    UserExists(String),

    #[error("invalid username '{0}': must be alphanumeric with '-', '_' or '.'")]
    InvalidUsername(String),

    #[error("cannot delay by {days} day(s): only {max} day(s) until the following assignment")]
    InvalidDelay { days: u32, max: i64 },

    #[error("no upcoming assignment to delay")]
    NoUpcomingAssignment,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, RotaError>;
