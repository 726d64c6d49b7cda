//! Configuration management for the booking desk.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::domain::BirthDatePolicy;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the booking desk.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spreadsheet values API base URL (everything before `/values/...`)
    pub sheet_url: String,

    /// Bearer token for the spreadsheet API
    pub sheet_token: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Input that steps back one level (default: "x")
    pub cancel_token: String,

    /// Input that returns to the start menu (default: "q")
    pub home_token: String,

    /// Whether birth dates may lie in the future (default: not-in-future)
    pub birth_date_policy: BirthDatePolicy,

    /// Password attempts per login (default: 3)
    pub max_password_attempts: usize,

    /// Name suggestions shown for an unknown name (default: 3)
    pub max_name_suggestions: usize,

    /// Directory receiving statistics reports (default: "reports")
    pub reports_dir: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `BOOKING_SHEET_URL`: Base URL of the spreadsheet values API
    /// - `BOOKING_SHEET_TOKEN`: Bearer token for the API
    ///
    /// Optional environment variables:
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `CANCEL_TOKEN` / `HOME_TOKEN`: navigation inputs (default: "x" / "q")
    /// - `BIRTH_DATE_POLICY`: "any" or "not-in-future" (default: "not-in-future")
    /// - `MAX_PASSWORD_ATTEMPTS`: attempts per login (default: 3)
    /// - `MAX_NAME_SUGGESTIONS`: suggestions for unknown names (default: 3)
    /// - `REPORTS_DIR`: statistics output directory (default: "reports")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let sheet_url = env::var("BOOKING_SHEET_URL")
            .map_err(|_| ConfigError::MissingVar("BOOKING_SHEET_URL".to_string()))?;

        let sheet_token = env::var("BOOKING_SHEET_TOKEN")
            .map_err(|_| ConfigError::MissingVar("BOOKING_SHEET_TOKEN".to_string()))?;

        if !sheet_url.starts_with("http://") && !sheet_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "BOOKING_SHEET_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if sheet_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "BOOKING_SHEET_TOKEN".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let defaults = Config::default();

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        let cancel_token = Self::token_var("CANCEL_TOKEN", &defaults.cancel_token)?;
        let home_token = Self::token_var("HOME_TOKEN", &defaults.home_token)?;

        if cancel_token == home_token {
            return Err(ConfigError::InvalidValue {
                var: "HOME_TOKEN".to_string(),
                reason: format!("Must differ from CANCEL_TOKEN ('{}')", cancel_token),
            });
        }

        let birth_date_policy = match env::var("BIRTH_DATE_POLICY") {
            Ok(val) => val
                .parse::<BirthDatePolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "BIRTH_DATE_POLICY".to_string(),
                    reason,
                })?,
            Err(_) => defaults.birth_date_policy,
        };

        let max_password_attempts =
            Self::parse_env_usize("MAX_PASSWORD_ATTEMPTS", defaults.max_password_attempts)?;
        if max_password_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_PASSWORD_ATTEMPTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let max_name_suggestions =
            Self::parse_env_usize("MAX_NAME_SUGGESTIONS", defaults.max_name_suggestions)?;

        let reports_dir = env::var("REPORTS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.reports_dir);

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            sheet_url,
            sheet_token,
            request_timeout,
            cancel_token,
            home_token,
            birth_date_policy,
            max_password_attempts,
            max_name_suggestions,
            reports_dir,
            log_level,
        })
    }

    /// Read a navigation token, rejecting blank values.
    fn token_var(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(val.trim().to_string()),
            Err(_) => Ok(default.to_string()),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sheet_url: String::new(),
            sheet_token: String::new(),
            request_timeout: 10,
            cancel_token: "x".to_string(),
            home_token: "q".to_string(),
            birth_date_policy: BirthDatePolicy::NotInFuture,
            max_password_attempts: 3,
            max_name_suggestions: 3,
            reports_dir: PathBuf::from("reports"),
            log_level: "error".to_string(),
        }
    }
}
