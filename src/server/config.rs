use chrono::{FixedOffset, Offset, Utc};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ROLLOVER_CRON: &str = "0 5 0 * * *";
const DEFAULT_FEE_REMINDER_CRON: &str = "0 0 9 * * *";

pub struct Config {
    pub database_url: String,

    /// Offset applied when deciding which calendar day or fee month "now"
    /// falls in. School days do not follow UTC.
    pub timezone: FixedOffset,

    pub rollover_cron: String,
    pub fee_reminder_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            timezone: reference_timezone("SCHOOL_UTC_OFFSET_MINUTES")?,
            rollover_cron: std::env::var("ATTENDANCE_ROLLOVER_CRON")
                .unwrap_or_else(|_| DEFAULT_ROLLOVER_CRON.to_string()),
            fee_reminder_cron: std::env::var("FEE_REMINDER_CRON")
                .unwrap_or_else(|_| DEFAULT_FEE_REMINDER_CRON.to_string()),
        })
    }
}

fn reference_timezone(name: &str) -> Result<FixedOffset, ConfigError> {
    let raw = match std::env::var(name) {
        Ok(value) => value,
        Err(_) => return Ok(Utc.fix()),
    };

    let minutes: i32 = raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: raw.clone(),
    })?;

    FixedOffset::east_opt(minutes * 60).ok_or(ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: raw,
    })
}
