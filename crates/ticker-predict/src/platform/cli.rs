//! Endpoint detection for terminal front-ends.
//!
//! Search order:
//! 1. `TICKER_PREDICT_ENDPOINT` environment variable
//! 2. `Predict.toml` (top-level `endpoint = "..."`) in the working directory
//!    or any of its parents
//! 3. [`DEFAULT_ENDPOINT`]

use std::fmt;
use std::path::{Path, PathBuf};

use log::warn;

use crate::service::DEFAULT_ENDPOINT;

pub const ENDPOINT_ENV_VAR: &str = "TICKER_PREDICT_ENDPOINT";
pub const CONFIG_FILE_NAME: &str = "Predict.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub url: String,
    pub source: EndpointSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointSource {
    /// Passed explicitly, e.g. `--endpoint`
    Explicit,
    /// Read from `TICKER_PREDICT_ENDPOINT`
    Environment,
    /// Read from a `Predict.toml`
    ConfigFile(PathBuf),
    /// Nothing configured
    Default,
}

impl fmt::Display for EndpointSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => f.write_str("command line"),
            Self::Environment => write!(f, "${ENDPOINT_ENV_VAR}"),
            Self::ConfigFile(path) => write!(f, "{}", path.display()),
            Self::Default => f.write_str("default"),
        }
    }
}

impl EndpointConfig {
    pub fn explicit(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            source: EndpointSource::Explicit,
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_owned(),
            source: EndpointSource::Default,
        }
    }
}

/// Walk up from `start` looking for `Predict.toml`.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Read the top-level `endpoint` key. Unreadable or malformed files count as
/// "not configured".
fn read_endpoint(config_file: &Path) -> Option<String> {
    let content = std::fs::read_to_string(config_file).ok()?;
    let table: toml::Table = match content.parse() {
        Ok(table) => table,
        Err(error) => {
            warn!("ignoring {}: {error}", config_file.display());
            return None;
        }
    };
    table
        .get("endpoint")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_owned)
}

/// Resolve the endpoint from an already-read environment value and a start
/// directory.
pub fn detect_endpoint_from(env_value: Option<String>, start: Option<&Path>) -> EndpointConfig {
    if let Some(url) = env_value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
        return EndpointConfig {
            url,
            source: EndpointSource::Environment,
        };
    }

    if let Some(config_file) = start.and_then(find_config_file) {
        if let Some(url) = read_endpoint(&config_file) {
            return EndpointConfig {
                url,
                source: EndpointSource::ConfigFile(config_file),
            };
        }
    }

    EndpointConfig::default()
}

/// Auto-detect the endpoint for the current process.
pub fn detect_endpoint() -> EndpointConfig {
    let cwd = std::env::current_dir().ok();
    detect_endpoint_from(std::env::var(ENDPOINT_ENV_VAR).ok(), cwd.as_deref())
}
