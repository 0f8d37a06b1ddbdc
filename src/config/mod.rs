use crate::{ENV_CONFIG_PATH, ENV_DYNAMODB_ENDPOINT_URL};

use aws_config::retry::RetryConfig;
use std::env;
use std::time::Duration;

mod file;

use file::ConfigFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_id: String,
    pub access_key: String,
}

/// Retry behaviour handed to the SDK. Retries happen inside the SDK, the helpers never
/// retry on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff_millis: u64,
    pub max_backoff_millis: u64,
}

impl RetryPolicy {
    /// Stream reading tolerates long outages: many attempts, short first backoff.
    pub fn stream_reader() -> Self {
        Self {
            max_attempts: 10,
            initial_backoff_millis: 100,
            max_backoff_millis: 10_000,
        }
    }

    /// The SDK expects at least one attempt and non-zero backoffs.
    pub fn is_valid(&self) -> bool {
        self.max_attempts > 0 && self.initial_backoff_millis > 0 && self.max_backoff_millis > 0
    }

    pub fn to_retry_config(self) -> RetryConfig {
        RetryConfig::standard()
            .with_max_attempts(self.max_attempts)
            .with_initial_backoff(Duration::from_millis(self.initial_backoff_millis))
            .with_max_backoff(Duration::from_millis(self.max_backoff_millis))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::stream_reader()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    endpoint_url: Option<String>,
    instance_name: Option<String>,
    credentials: Option<Credentials>,
    retry_policy: RetryPolicy,
}

impl Config {
    /// Reads the endpoint from the environment and the rest from the optional config file.
    pub fn new() -> Self {
        let conf_path = env::var(ENV_CONFIG_PATH).ok();
        let file = ConfigFile::new(conf_path);
        let endpoint_url = env::var(ENV_DYNAMODB_ENDPOINT_URL).ok();

        Self::from_file(file).with_endpoint_url(endpoint_url)
    }

    fn from_file(file: ConfigFile) -> Self {
        let ConfigFile {
            endpoint_url,
            instance_name,
            access_id,
            access_key,
            retry,
        } = file;

        let credentials = match (access_id, access_key) {
            (Some(access_id), Some(access_key)) => Some(Credentials {
                access_id,
                access_key,
            }),
            _ => None,
        };

        Self {
            endpoint_url,
            instance_name,
            credentials,
            retry_policy: retry.map(|r| r.into_policy()).unwrap_or_default(),
        }
    }

    /// `None` keeps the current value.
    pub fn with_endpoint_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => Self {
                endpoint_url: Some(url),
                ..self
            },
            None => self,
        }
    }

    pub fn with_instance_name<T: Into<String>>(self, instance_name: T) -> Self {
        Self {
            instance_name: Some(instance_name.into()),
            ..self
        }
    }

    pub fn with_credentials<S, T>(self, access_id: S, access_key: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            credentials: Some(Credentials {
                access_id: access_id.into(),
                access_key: access_key.into(),
            }),
            ..self
        }
    }

    pub fn with_retry_policy(self, retry_policy: RetryPolicy) -> Self {
        Self {
            retry_policy,
            ..self
        }
    }

    pub fn endpoint_url(&self) -> Option<String> {
        self.endpoint_url.clone()
    }

    /// The region the tables live in.
    pub fn instance_name(&self) -> Option<String> {
        self.instance_name.clone()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_uses_stream_reader_retry_by_default() {
        let config = Config::default();
        assert_eq!(config.retry_policy(), RetryPolicy::stream_reader());
        assert!(config.endpoint_url().is_none());
        assert!(config.credentials().is_none());
    }

    #[test]
    fn it_builds_from_config_file() {
        let config = Config::from_file(ConfigFile::new(Some("src/config/test/valid.yml")));

        assert_eq!(config.endpoint_url().as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.instance_name().as_deref(), Some("ap-northeast-1"));
        assert_eq!(
            config.credentials(),
            Some(&Credentials {
                access_id: "local-id".into(),
                access_key: "local-key".into(),
            })
        );
        assert_eq!(config.retry_policy().max_attempts, 3);
        assert_eq!(config.retry_policy().max_backoff_millis, 2000);
    }

    #[test]
    fn it_ignores_partial_credentials() {
        let file = ConfigFile {
            access_id: Some("id".into()),
            ..ConfigFile::default()
        };

        assert!(Config::from_file(file).credentials().is_none());
    }

    #[test]
    fn endpoint_override_keeps_value_on_none() {
        let config = Config::default().with_endpoint_url(Some("http://localhost:4566".into()));
        let config = config.with_endpoint_url(None);
        assert_eq!(config.endpoint_url().as_deref(), Some("http://localhost:4566"));
    }

    #[test]
    fn stream_reader_policy_is_valid() {
        assert!(RetryPolicy::stream_reader().is_valid());
        assert!(!RetryPolicy {
            max_attempts: 0,
            ..RetryPolicy::stream_reader()
        }
        .is_valid());
    }

    #[test]
    fn it_converts_retry_policy_to_sdk_config() {
        let retry = RetryPolicy::stream_reader().to_retry_config();
        assert_eq!(retry.max_attempts(), 10);
        assert_eq!(retry.initial_backoff(), Duration::from_millis(100));
    }
}
