use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::api::{DataLakeMeasureEndpoint, DataStreamEndpoint, EndpointContext, VersionEndpoint};
use crate::{ApiPath, ClientConfig, ConfigError, ConnectionConfig, RequestError, RequestExecutor};

/// Entry point for talking to a StreamPipes installation.
///
/// The configuration is validated once, at construction. Endpoints are cheap
/// views borrowed from the client; construct them whenever needed.
///
/// ```no_run
/// use streampipes_client::{ApiKeyCredentials, ClientConfig, DataLakeMeasureApi, StreamPipesClient};
///
/// let config = ClientConfig::new("localhost", 8082)
///     .with_https_disabled(true)
///     .with_credentials(ApiKeyCredentials::new("admin@streampipes.apache.org", "api-key"));
/// let client = StreamPipesClient::new(config)?;
///
/// for measure in client.data_lake_measure_api().all()? {
///     println!("{}", measure.measure_name);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct StreamPipesClient {
    config: ConnectionConfig,
    executor: RequestExecutor,
}

impl StreamPipesClient {
    /// Validates `config` and creates a client.
    ///
    /// Fails with [`ConfigError`] when the settings are inconsistent or the
    /// transport cannot be initialized; no endpoint can be obtained then.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Self::from_connection_config(config.validate()?)
    }

    /// Creates a client from settings that were already validated.
    ///
    /// Only fails when the HTTP transport cannot be initialized.
    pub fn from_connection_config(config: ConnectionConfig) -> Result<Self, ConfigError> {
        debug!(base_url = %config.base_url(), "creating StreamPipes client");
        let executor = RequestExecutor::new(config.credentials().cloned())?;
        Ok(Self { config, executor })
    }

    /// The validated settings this client was built from.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Endpoints for measurements stored in the data lake.
    pub fn data_lake_measure_api(&self) -> DataLakeMeasureEndpoint<'_> {
        DataLakeMeasureEndpoint::new(self.context())
    }

    /// Endpoints for registered data streams.
    pub fn data_stream_api(&self) -> DataStreamEndpoint<'_> {
        DataStreamEndpoint::new(self.context())
    }

    /// Endpoints for installation metadata.
    pub fn version_api(&self) -> VersionEndpoint<'_> {
        VersionEndpoint::new(self.context())
    }

    /// Sends a request to an arbitrary resource path.
    ///
    /// This bypasses the typed endpoints but keeps the client configuration
    /// and credentials. The response is returned as untyped JSON.
    pub fn request_json(
        &self,
        method: Method,
        path: &ApiPath,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value, RequestError> {
        let url = self.context().url(path);
        self.executor.execute_with_query(method, &url, query, body)
    }

    fn context(&self) -> EndpointContext<'_> {
        EndpointContext::new(&self.config, &self.executor)
    }
}
