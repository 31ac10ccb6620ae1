//! Demo configuration, read from the environment.

use core::str::FromStr;

use chrono::{Datelike, Utc};

use bookstore_observability::LogFormat;

pub const CURRENT_YEAR_VAR: &str = "BOOKSTORE_CURRENT_YEAR";
pub const MAX_AGE_VAR: &str = "BOOKSTORE_MAX_AGE";
pub const LOG_FORMAT_VAR: &str = "BOOKSTORE_LOG_FORMAT";

const DEFAULT_MAX_AGE: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Reference year for outdated-item pruning.
    pub current_year: i32,
    /// Items strictly older than this many years are pruned.
    pub max_age: u32,
    pub log_format: LogFormat,
}

pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Output format from `BOOKSTORE_LOG_FORMAT`.
///
/// Read before logging is installed, so an unparsable value is handed back as
/// `Err(raw)` for the caller to report once the subscriber is up.
pub fn log_format(lookup: &impl Fn(&str) -> Option<String>) -> Result<LogFormat, String> {
    match lookup(LOG_FORMAT_VAR) {
        None => Ok(LogFormat::default()),
        Some(raw) => raw.parse().map_err(|_| raw),
    }
}

impl DemoConfig {
    pub fn from_env(log_format: LogFormat) -> Self {
        Self::from_lookup(env_lookup, log_format)
    }

    /// Build from an arbitrary key lookup; unparsable values are logged and
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, log_format: LogFormat) -> Self {
        Self {
            current_year: parse_or(&lookup, CURRENT_YEAR_VAR, Utc::now().year()),
            max_age: parse_or(&lookup, MAX_AGE_VAR, DEFAULT_MAX_AGE),
            log_format,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + core::fmt::Debug,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, ?default, "invalid config value; using default");
            default
        }
    }
}
