use crate::error::{Result, RotaError};
use regex::Regex;
use std::sync::OnceLock;

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn username_re() -> &'static Regex {
    USERNAME_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.\-]*$").unwrap())
}

/// Usernames are snapshot map keys and URL path segments, so keep them
/// to a safe character set.
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() || username.len() > 64 || !username_re().is_match(username) {
        return Err(RotaError::InvalidUsername(username.to_string()));
    }
    Ok(())
}
