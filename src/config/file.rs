use super::RetryPolicy;

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub endpoint_url: Option<String>,
    pub instance_name: Option<String>,
    pub access_id: Option<String>,
    pub access_key: Option<String>,
    pub retry: Option<RetryFile>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RetryFile {
    pub max_attempts: Option<u32>,
    pub initial_backoff_millis: Option<u64>,
    pub max_backoff_millis: Option<u64>,
}

impl RetryFile {
    /// Unset fields fall back to the stream reader defaults. A policy with a zero
    /// field is dropped as a whole.
    pub fn into_policy(self) -> RetryPolicy {
        let default = RetryPolicy::stream_reader();

        let policy = RetryPolicy {
            max_attempts: self.max_attempts.unwrap_or(default.max_attempts),
            initial_backoff_millis: self
                .initial_backoff_millis
                .unwrap_or(default.initial_backoff_millis),
            max_backoff_millis: self
                .max_backoff_millis
                .unwrap_or(default.max_backoff_millis),
        };

        if policy.is_valid() {
            policy
        } else {
            warn!("Invalid retry settings: {:?}", policy);
            warn!("Use the default retry settings.");
            default
        }
    }
}

impl ConfigFile {
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Self {
        path.map(read_config).unwrap_or_default()
    }
}

fn read_config<P: AsRef<Path>>(path: P) -> ConfigFile {
    _read_config(path).unwrap_or_else(|err| {
        warn!("{err}");
        warn!("Skip reading config file.");
        ConfigFile::default()
    })
}

fn _read_config<P: AsRef<Path>>(path: P) -> Result<ConfigFile, String> {
    let content = fs::read_to_string(&path)
        .map_err(|err| format!("Failed to read: {}. {err}", path.as_ref().to_string_lossy()))?;
    serde_yaml::from_str(&content)
        .map_err(|err| format!("Failed to deserialize config file: {err}"))
}
