use crate::error::{Result, RotaError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Scheduling configuration, read once at startup.
///
/// Every field has a default, and a missing config file is not an
/// error: the service runs fine on the weekly-Monday defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Weekday new rotations are anchored to: 0 = Monday .. 6 = Sunday.
    #[serde(default)]
    pub weekday_start: u32,
    /// Days between consecutive turns.
    #[serde(default = "default_interval_days")]
    pub interval_days: u32,
    /// Whether a freshly generated rotation may start on the current day.
    #[serde(default)]
    pub allow_start_today: bool,
    /// Path of the JSON snapshot file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_interval_days() -> u32 {
    7
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weekday_start: 0,
            interval_days: default_interval_days(),
            allow_start_today: false,
            data_file: default_data_file(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(path, data.as_bytes())
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval_days == 0 {
            return Err(RotaError::InvalidConfig(
                "interval_days must be positive".to_string(),
            ));
        }
        if self.weekday_start > 6 {
            return Err(RotaError::InvalidConfig(format!(
                "weekday_start must be 0-6 (Monday-Sunday), got {}",
                self.weekday_start
            )));
        }
        Ok(())
    }
}
