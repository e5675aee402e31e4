//! Rust client library for the Apache StreamPipes REST API.
//!
//! Public API layers:
//! - [`ClientConfig`]/[`ConnectionConfig`]: connection settings and their
//!   validated form.
//! - [`StreamPipesClient`]: entry point handing out typed endpoints such as
//!   [`DataLakeMeasureEndpoint`].
//! - [`RequestExecutor`] and [`ApiPath`]: the blocking JSON transport and
//!   resource path builder the endpoints are made of.
//! - [`model`]: wire types exchanged with the API.
//! - [`ConfigError`]/[`RequestError`]: error types for construction and calls.
//!
//! Every call is a single blocking round trip. Retries and timeouts beyond
//! the transport defaults are left to the caller.

mod api;
mod api_path;
mod client;
mod config;
mod error;
mod executor;
pub mod model;

pub use api::{
    DataLakeMeasureApi, DataLakeMeasureEndpoint, DataStreamApi, DataStreamEndpoint,
    MeasurementQuery, Order, VersionApi, VersionEndpoint,
};
/// Ordered resource path segments.
pub use api_path::ApiPath;
/// Top-level client.
pub use client::StreamPipesClient;
pub use config::{ApiKeyCredentials, ClientConfig, ConnectionConfig};
/// Error types returned by configuration and request operations.
pub use error::{ConfigError, RequestError};
/// Blocking JSON request executor.
pub use executor::RequestExecutor;
