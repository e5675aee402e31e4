use thiserror::Error;

/// Errors raised while assembling or validating a client configuration.
///
/// A constructed [`crate::StreamPipesClient`] never returns them.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// HTTPS is disabled while the port is the standard HTTPS port.
    #[error(
        "invalid configuration: `https_disabled` is set to true and `port` is set to {port}; \
         to connect to port {port} enable HTTPS, otherwise choose a different port"
    )]
    InconsistentSecurityPort { port: String },

    /// Host and port do not form a valid absolute URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// A credential environment variable could not be read.
    #[error("failed to read environment variable '{name}': {source}")]
    EnvironmentVariable {
        name: String,
        source: std::env::VarError,
    },

    /// The HTTP transport could not be initialized, for example the TLS backend.
    #[error("failed to initialize HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Errors returned by request execution and the API endpoints.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The composed resource URL could not be parsed.
    #[error("invalid request URL '{0}'")]
    InvalidUrl(String),

    /// Query parameters were rejected before sending the request.
    #[error("invalid query parameter: {0}")]
    InvalidQuery(String),

    /// Request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    EncodeFailure(#[source] serde_json::Error),

    /// HTTP transport-layer request failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status with response payload.
    #[error("server returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body did not match the expected JSON shape.
    #[error("failed to decode response body: {source}")]
    DecodeFailure {
        source: serde_json::Error,
        body: String,
    },
}

impl RequestError {
    /// Returns the HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(error) => error.status(),
            _ => None,
        }
    }
}
