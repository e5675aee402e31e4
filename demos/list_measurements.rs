//! List all data lake measurements of a StreamPipes installation.
//!
//! Run:
//! `SP_USERNAME=<user> SP_API_KEY=<key> cargo run --example list_measurements`
//!
//! Optional env vars:
//! - `SP_HOST` (defaults to `localhost`)
//! - `SP_PORT` (defaults to `8082`)
//! - `RUST_LOG` (for example `streampipes_client=debug`)

use streampipes_client::{ApiKeyCredentials, ClientConfig, DataLakeMeasureApi, StreamPipesClient};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = match ApiKeyCredentials::from_env("SP_USERNAME", "SP_API_KEY") {
        Ok(credentials) => credentials,
        Err(error) => {
            eprintln!("{error}; set SP_USERNAME and SP_API_KEY before running this example.");
            std::process::exit(2);
        }
    };

    let host = std::env::var("SP_HOST").unwrap_or_else(|_| "localhost".to_owned());
    let port = std::env::var("SP_PORT").unwrap_or_else(|_| "8082".to_owned());
    let config = ClientConfig::new(host, port)
        .with_https_disabled(true)
        .with_credentials(credentials);
    let client = StreamPipesClient::new(config)?;

    let measures = client.data_lake_measure_api().all()?;
    println!("Found {} measurements", measures.len());
    for measure in &measures {
        println!(
            "- {:<40} ({})",
            measure.measure_name,
            measure.timestamp_runtime_name().unwrap_or("-")
        );
    }
    Ok(())
}
