use std::fmt;

use url::Url;

use crate::ConfigError;

/// Port reserved for HTTPS connections.
const HTTPS_PORT: &str = "443";

/// API key credentials sent with every request.
///
/// The username and key are transmitted as the `X-API-USER` and `X-API-KEY`
/// headers.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyCredentials {
    username: String,
    api_key: String,
}

impl ApiKeyCredentials {
    /// Creates credentials for `username` with the API key issued to that user.
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    /// Reads credentials from the two named environment variables.
    ///
    /// The variable names are chosen by the caller, for example
    /// `ApiKeyCredentials::from_env("SP_USERNAME", "SP_API_KEY")`.
    pub fn from_env(username_var: &str, api_key_var: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(read_env(username_var)?, read_env(api_key_var)?))
    }

    /// User the API key belongs to, sent as `X-API-USER`.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Secret key sent as `X-API-KEY`.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

fn read_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|source| ConfigError::EnvironmentVariable {
        name: name.to_owned(),
        source,
    })
}

/// Unvalidated connection settings supplied by the caller.
///
/// HTTPS is enabled unless [`Self::with_https_disabled`] is used. Call
/// [`Self::validate`] (or pass the config to [`crate::StreamPipesClient::new`])
/// to obtain a usable [`ConnectionConfig`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    host: String,
    port: String,
    https_disabled: bool,
    credentials: Option<ApiKeyCredentials>,
}

impl ClientConfig {
    /// Creates settings for `host` and `port`.
    ///
    /// The port may be given as a number or as a string; it is kept as its
    /// textual form.
    pub fn new(host: impl Into<String>, port: impl fmt::Display) -> Self {
        Self {
            host: host.into(),
            port: port.to_string(),
            https_disabled: false,
            credentials: None,
        }
    }

    #[must_use]
    pub fn with_https_disabled(mut self, https_disabled: bool) -> Self {
        self.https_disabled = https_disabled;
        self
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: ApiKeyCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Validates the settings and derives the base URL.
    ///
    /// Fails with [`ConfigError::InconsistentSecurityPort`] when HTTPS is
    /// disabled and the port is `443`. Every other combination of the two
    /// settings is accepted.
    pub fn validate(self) -> Result<ConnectionConfig, ConfigError> {
        if self.https_disabled && self.port == HTTPS_PORT {
            return Err(ConfigError::InconsistentSecurityPort { port: self.port });
        }

        let scheme = if self.https_disabled { "http" } else { "https" };
        let raw = format!("{scheme}://{}:{}/", self.host, self.port);
        let base_url = Url::parse(&raw).map_err(|_| ConfigError::InvalidBaseUrl(raw.clone()))?;

        // A host carrying its own path or query would shift every resource path.
        if base_url.path() != "/" || base_url.query().is_some() {
            return Err(ConfigError::InvalidBaseUrl(raw));
        }

        Ok(ConnectionConfig {
            host: self.host,
            port: self.port,
            https_disabled: self.https_disabled,
            credentials: self.credentials,
            base_url,
        })
    }
}

/// Validated, immutable connection settings.
///
/// Only obtainable through [`ClientConfig::validate`].
#[derive(Clone, Debug)]
pub struct ConnectionConfig {
    host: String,
    port: String,
    https_disabled: bool,
    credentials: Option<ApiKeyCredentials>,
    base_url: Url,
}

impl ConnectionConfig {
    /// Host name or address as supplied by the caller.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port in its textual form, as it was checked during validation.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Whether requests use plain HTTP.
    pub fn https_disabled(&self) -> bool {
        self.https_disabled
    }

    /// Credentials attached to every request, if any.
    pub fn credentials(&self) -> Option<&ApiKeyCredentials> {
        self.credentials.as_ref()
    }

    /// Base URL all resource paths are appended to, with a trailing slash.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
