use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: tracing::Level,

    // Reports
    pub page_size: usize,
    pub mock_attendance_days: u32,
    pub mock_seed: Option<u64>,

    // Leave policy
    pub paid_leaves_available: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or unparseable keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            data_dir: lookup("PORTAL_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            log_dir: lookup("PORTAL_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            log_level: parse_or(&lookup, "PORTAL_LOG_LEVEL", tracing::Level::DEBUG),

            page_size: parse_or(&lookup, "REPORT_PAGE_SIZE", 10usize).max(1),
            mock_attendance_days: parse_or(&lookup, "MOCK_ATTENDANCE_DAYS", 30),
            mock_seed: lookup("MOCK_SEED").and_then(|v| v.trim().parse().ok()),

            paid_leaves_available: parse_or(&lookup, "PAID_LEAVES_AVAILABLE", 3),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Unparseable config value, using default");
            default
        }),
        None => default,
    }
}
