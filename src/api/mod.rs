//! Typed endpoints, one per group of StreamPipes resources.
//!
//! Each group is a trait plus an endpoint struct borrowed from
//! [`crate::StreamPipesClient`], so an endpoint never outlives its client.

mod data_lake_measure;
mod data_stream;
mod version;

pub use data_lake_measure::{DataLakeMeasureApi, DataLakeMeasureEndpoint, MeasurementQuery, Order};
pub use data_stream::{DataStreamApi, DataStreamEndpoint};
pub use version::{VersionApi, VersionEndpoint};

use crate::{ApiPath, ConnectionConfig, RequestExecutor};

/// Configuration and executor shared by every endpoint of a client.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EndpointContext<'a> {
    config: &'a ConnectionConfig,
    executor: &'a RequestExecutor,
}

impl<'a> EndpointContext<'a> {
    pub(crate) fn new(config: &'a ConnectionConfig, executor: &'a RequestExecutor) -> Self {
        Self { config, executor }
    }

    pub(crate) fn url(&self, path: &ApiPath) -> String {
        path.build(self.config.base_url().as_str())
    }

    pub(crate) fn executor(&self) -> &'a RequestExecutor {
        self.executor
    }
}
