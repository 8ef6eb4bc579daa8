//! Environment-driven settings.
//!
//! Every value has a default; environment variables override them. Threshold
//! values may also come from a TOML file named by `FUNDSCOPE_THRESHOLDS_FILE`,
//! with per-threshold environment variables applied on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::classification::ClassificationThresholds;
use crate::source::RetryPolicy;

/// Errors from loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read thresholds file {path}: {source}")]
    ThresholdsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid threshold {name}={value}: expected a percentage between 0 and 100")]
    InvalidThreshold { name: String, value: String },
}

/// Runtime settings for loading and classifying records.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// How long a parsed file stays cached.
    pub cache_ttl: Duration,
    pub http_timeout: Duration,
    pub retry: RetryPolicy,
    pub thresholds: ClassificationThresholds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(900),
            http_timeout: Duration::from_secs(90),
            retry: RetryPolicy::default(),
            thresholds: ClassificationThresholds::default(),
        }
    }
}

/// Top-level structure for a thresholds TOML file.
#[derive(Deserialize, Debug, Default)]
struct ThresholdsFile {
    #[serde(default)]
    thresholds: ClassificationThresholds,
}

impl Settings {
    /// Loads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let u64_or = |key: &str, default: u64| {
            lookup(key)
                .and_then(|val| val.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        let retry = RetryPolicy {
            max_retries: u64_or("FUNDSCOPE_RETRY_MAX", defaults.retry.max_retries as u64) as usize,
            base_delay_ms: u64_or("FUNDSCOPE_RETRY_BASE_MS", defaults.retry.base_delay_ms),
            max_delay_ms: u64_or("FUNDSCOPE_RETRY_MAX_MS", defaults.retry.max_delay_ms),
        };

        let mut thresholds = match lookup("FUNDSCOPE_THRESHOLDS_FILE") {
            Some(path) if !path.trim().is_empty() => load_thresholds_file(Path::new(path.trim()))?,
            _ => defaults.thresholds,
        };
        apply_threshold(&lookup, "FUNDSCOPE_PAC_SHARE_PCT", &mut thresholds.pac_share_pct)?;
        apply_threshold(
            &lookup,
            "FUNDSCOPE_INDIVIDUAL_SHARE_PCT",
            &mut thresholds.individual_share_pct,
        )?;
        apply_threshold(&lookup, "FUNDSCOPE_SELF_FUNDED_PCT", &mut thresholds.self_funded_pct)?;
        apply_threshold(&lookup, "FUNDSCOPE_PARTY_SHARE_PCT", &mut thresholds.party_share_pct)?;

        Ok(Self {
            cache_ttl: Duration::from_secs(u64_or(
                "FUNDSCOPE_CACHE_TTL_SECS",
                defaults.cache_ttl.as_secs(),
            )),
            http_timeout: Duration::from_secs(u64_or(
                "FUNDSCOPE_HTTP_TIMEOUT_SECS",
                defaults.http_timeout.as_secs(),
            )),
            retry,
            thresholds,
        })
    }
}

/// Parses thresholds from TOML. Missing keys keep their defaults.
pub fn parse_thresholds_toml(toml_content: &str) -> Result<ClassificationThresholds, ConfigError> {
    let file: ThresholdsFile = toml::from_str(toml_content)?;
    let t = file.thresholds;
    for (name, value) in [
        ("pac_share_pct", t.pac_share_pct),
        ("individual_share_pct", t.individual_share_pct),
        ("self_funded_pct", t.self_funded_pct),
        ("party_share_pct", t.party_share_pct),
    ] {
        if !is_valid_pct(value) {
            return Err(ConfigError::InvalidThreshold {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(t)
}

pub fn load_thresholds_file(path: &Path) -> Result<ClassificationThresholds, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ThresholdsFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Loaded classification thresholds from {}", path.display());
    parse_thresholds_toml(&content)
}

fn apply_threshold<F>(lookup: &F, key: &str, slot: &mut f64) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(());
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if is_valid_pct(value) => {
            *slot = value;
            Ok(())
        }
        _ => Err(ConfigError::InvalidThreshold {
            name: key.to_string(),
            value: raw,
        }),
    }
}

fn is_valid_pct(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}
