//! Print the latest events of one data lake measurement.
//!
//! Run:
//! `SP_USERNAME=<user> SP_API_KEY=<key> cargo run --example query_measurement -- <measurement>`
//!
//! Optional env vars:
//! - `SP_HOST` (defaults to `localhost`)
//! - `SP_PORT` (defaults to `8082`)

use streampipes_client::{
    ApiKeyCredentials, ClientConfig, DataLakeMeasureApi, MeasurementQuery, Order,
    StreamPipesClient,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(measurement) = std::env::args().nth(1) else {
        eprintln!("Usage: query_measurement <measurement>");
        std::process::exit(2);
    };

    let host = std::env::var("SP_HOST").unwrap_or_else(|_| "localhost".to_owned());
    let port = std::env::var("SP_PORT").unwrap_or_else(|_| "8082".to_owned());
    let config = ClientConfig::new(host, port)
        .with_https_disabled(true)
        .with_credentials(ApiKeyCredentials::from_env("SP_USERNAME", "SP_API_KEY")?);
    let client = StreamPipesClient::new(config)?;

    let query = MeasurementQuery::new().with_limit(10).with_order(Order::Desc);
    let result = client
        .data_lake_measure_api()
        .get_series(&measurement, &query)?;

    for record in result.records() {
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}
