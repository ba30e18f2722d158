//! Runtime configuration, read from the environment once at startup.

use std::path::PathBuf;

use grocer_products::ValidationMode;

pub const DATA_PATH_ENV: &str = "GROCER_DATA_PATH";
pub const VALIDATION_ENV: &str = "GROCER_VALIDATION";

pub const DEFAULT_DATA_PATH: &str = "data/data.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// JSON file holding a top-level array of product records.
    pub data_path: PathBuf,
    pub validation: ValidationMode,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            validation: ValidationMode::Strict,
        }
    }
}

impl ReportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        match lookup(DATA_PATH_ENV) {
            Some(path) if !path.trim().is_empty() => config.data_path = PathBuf::from(path),
            _ => tracing::info!(path = DEFAULT_DATA_PATH, "{DATA_PATH_ENV} not set; using default"),
        }

        if let Some(mode) = lookup(VALIDATION_ENV) {
            match parse_mode(&mode) {
                Some(mode) => config.validation = mode,
                None => tracing::warn!(value = %mode, "unrecognized {VALIDATION_ENV}; using strict"),
            }
        }

        config
    }
}

fn parse_mode(value: &str) -> Option<ValidationMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "strict" => Some(ValidationMode::Strict),
        "lenient" => Some(ValidationMode::Lenient),
        _ => None,
    }
}
