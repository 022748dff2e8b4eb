//! Client configuration

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::model::CustomerId;

/// Default service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://googleads.googleapis.com";

/// Default API version.
pub const DEFAULT_API_VERSION: &str = "v17";

/// Environment variable holding the developer token.
pub const ENV_DEVELOPER_TOKEN: &str = "ADSEARCH_DEVELOPER_TOKEN";
/// Environment variable holding the OAuth2 access token.
pub const ENV_ACCESS_TOKEN: &str = "ADSEARCH_ACCESS_TOKEN";
/// Environment variable holding the manager account id used for access.
pub const ENV_LOGIN_CUSTOMER_ID: &str = "ADSEARCH_LOGIN_CUSTOMER_ID";
/// Environment variable overriding the service endpoint.
pub const ENV_ENDPOINT: &str = "ADSEARCH_ENDPOINT";
/// Environment variable overriding the API version.
pub const ENV_API_VERSION: &str = "ADSEARCH_API_VERSION";
/// Environment variable setting the per-page timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "ADSEARCH_TIMEOUT_SECS";

/// Settings needed to build an [`AdsClient`](crate::AdsClient).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use adsearch_lib::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_developer_token("dev-token")
///     .with_access_token("ya29.token")
///     .with_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Developer token sent with every request.
    pub developer_token: Option<String>,
    /// OAuth2 access token.
    pub access_token: Option<String>,
    /// Manager account through which the target account is accessed.
    pub login_customer_id: Option<CustomerId>,
    /// Service base URL.
    ///
    /// Default: `https://googleads.googleapis.com`
    pub endpoint: String,
    /// API version path segment.
    ///
    /// Default: `v17`
    pub api_version: String,
    /// Timeout applied to each page fetch.
    ///
    /// Default: none
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            developer_token: None,
            access_token: None,
            login_customer_id: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the developer token.
    pub fn with_developer_token(mut self, token: impl Into<String>) -> Self {
        self.developer_token = Some(token.into());
        self
    }

    /// Sets the access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the login customer id.
    pub fn with_login_customer_id(mut self, id: CustomerId) -> Self {
        self.login_customer_id = Some(id);
        self
    }

    /// Sets the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Sets the per-page timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Loads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Loads settings from the process environment overlaid with a
    /// dotenv-style file. Values in the file win.
    ///
    /// The process environment is not modified.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut vars: HashMap<String, String> = std::env::vars().collect();
        for item in dotenvy::from_path_iter(path.as_ref())? {
            let (key, value) = item?;
            vars.insert(key, value);
        }
        Self::from_vars(vars)
    }

    /// Builds a config from key/value pairs, ignoring unknown keys and empty values.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Result<Self, ConfigError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();

        for (key, value) in vars {
            let value: String = value.into();
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            match key.as_ref() {
                ENV_DEVELOPER_TOKEN => config.developer_token = Some(value.to_string()),
                ENV_ACCESS_TOKEN => config.access_token = Some(value.to_string()),
                ENV_LOGIN_CUSTOMER_ID => {
                    let id = value.parse::<CustomerId>().map_err(|e| {
                        ConfigError::invalid(ENV_LOGIN_CUSTOMER_ID, e.to_string())
                    })?;
                    config.login_customer_id = Some(id);
                }
                ENV_ENDPOINT => config.endpoint = value.to_string(),
                ENV_API_VERSION => config.api_version = value.to_string(),
                ENV_TIMEOUT_SECS => {
                    let secs = match value.parse::<u64>() {
                        Ok(secs) if secs > 0 => secs,
                        _ => {
                            return Err(ConfigError::invalid(
                                ENV_TIMEOUT_SECS,
                                format!("'{}' is not a positive number of seconds", value),
                            ));
                        }
                    };
                    config.timeout = Some(Duration::from_secs(secs));
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// Returns the developer token, or an error naming the missing setting.
    pub fn require_developer_token(&self) -> Result<&str, ConfigError> {
        self.developer_token.as_deref().ok_or(ConfigError::Missing {
            key: ENV_DEVELOPER_TOKEN,
        })
    }

    /// Returns the access token, or an error naming the missing setting.
    pub fn require_access_token(&self) -> Result<&str, ConfigError> {
        self.access_token.as_deref().ok_or(ConfigError::Missing {
            key: ENV_ACCESS_TOKEN,
        })
    }
}
